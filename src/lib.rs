//! Singly linked lists with arena storage.
//!
//! A linked list node is the textbook self-referential type: a value plus
//! a pointer to the next node. Expressing that with owning pointers means
//! manual lifetime tracking; this crate takes the other route and stores
//! nodes in an arena, so a "pointer" is a stable integer index and the
//! absent link is a reserved sentinel value:
//!
//! ```text
//! Arena (slab)   - owns the nodes, hands out stable indices
//! List           - coordinates indices: head, tail, cached length
//! OwnedList      - the two bundled together, one-owner convenience
//! ```
//!
//! The chain is singly linked and acyclic: every node is owned by exactly
//! one predecessor (or the list head), and traversal from the head reaches
//! the sentinel in exactly `len` steps.
//!
//! # Quick Start
//!
//! ```
//! use slablist::OwnedList;
//!
//! let mut list: OwnedList<i32> = OwnedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
//!
//! // Positional operations are validated, never clamped
//! assert_eq!(list.remove_at(1), Ok(1));
//! assert!(list.get(5).is_err());
//!
//! // Equality scans signal absence, not failure
//! assert_eq!(list.find(&2), Some(1));
//! assert!(!list.remove_value(&7));
//! ```
//!
//! # Shared Storage
//!
//! [`List`] keeps storage external so several lists can chain nodes out of
//! one arena; every operation takes `&mut storage`:
//!
//! ```
//! use slablist::{ArenaListStorage, List};
//!
//! let mut nodes: ArenaListStorage<i32> = ArenaListStorage::new();
//! let mut ready: List<i32, ArenaListStorage<i32>> = List::new();
//! let mut done: List<i32, ArenaListStorage<i32>> = List::new();
//!
//! ready.push_back(&mut nodes, 1);
//! ready.push_back(&mut nodes, 2);
//!
//! while let Some(v) = ready.pop_front(&mut nodes) {
//!     done.push_back(&mut nodes, v);
//! }
//!
//! assert_eq!(done.iter(&nodes).copied().collect::<Vec<_>>(), [1, 2]);
//! ```
//!
//! All operations on a list must use the same storage instance it was
//! built with; passing a different storage is undefined behavior (the
//! same discipline the `slab` crate asks of its keys).
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back`, `push_front`, `pop_front` | O(1) |
//! | `insert_at`, `remove_at`, `get` | O(index) |
//! | `remove_value`, `find` | O(n) scan from head |
//! | `len` | O(1), cached |
//!
//! # Storage Options
//!
//! | Storage | Capacity | Use Case |
//! |---------|----------|----------|
//! | [`Arena`] | Growable | Default choice |
//! | `slab::Slab` | Growable | Shared slab discipline with other `slab` users |
//!
//! # Concurrency
//!
//! None. Operations are synchronous and single-threaded; callers sharing
//! a list across threads must provide external mutual exclusion.
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod list;
pub mod owned;
pub mod storage;

pub use error::IndexOutOfRange;
pub use index::Index;
pub use list::{ArenaListStorage, Drain, Iter, List, ListNode};
pub use owned::OwnedList;
pub use storage::{Arena, Storage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
