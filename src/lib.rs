//! A height-balanced (AVL) ordered set using the _allocated_ pattern for
//! explicit allocator control.
//!
//! [`AvlTree`] stores a set of totally ordered keys. After every insertion and
//! removal it repairs itself with rotations so that the heights of the two
//! subtrees of any node differ by at most one. Membership tests, insertions
//! and removals therefore take O(log n) steps.
//!
//! # Quick Start
//!
//! ```
//! use allocated_avl::{AvlTree, TreeError};
//!
//! let mut tree = AvlTree::new();
//! tree.insert(1)?;
//! tree.insert(2)?;
//! tree.insert(3)?;
//!
//! // Ascending inserts are rotated into a balanced shape.
//! assert_eq!(tree.root().map(|root| *root.key()), Some(2));
//! assert_eq!(tree.height(), Some(1));
//!
//! assert_eq!(tree.insert(2), Err(TreeError::AlreadyPresent));
//! # Ok::<(), TreeError>(())
//! ```
//!
//! # Allocators
//!
//! Every node is a separate allocation from the tree's allocator, which is
//! any [`allocator_api2`] allocator. [`AvlTree::new`] uses the global
//! allocator; [`AvlTree::new_in`] takes another one. Passing a reference lets
//! several trees share an allocator, for example a counting allocator from
//! the `allocated` crate:
//!
//! ```
//! use allocated::CountingAllocator;
//! use allocated_avl::AvlTree;
//!
//! let alloc = CountingAllocator::default();
//! let mut tree = AvlTree::new_in(&alloc);
//! tree.insert("b")?;
//! tree.insert("a")?;
//!
//! assert_eq!(alloc.net_allocations(), 2);
//! drop(tree);
//! assert_eq!(alloc.net_allocations(), 0);
//! # Ok::<(), allocated_avl::TreeError>(())
//! ```
//!
//! Allocation failure is reported as [`TreeError::AllocFailed`] rather than
//! aborting.
//!
//! # Logging
//!
//! Rotations and node releases are reported at `trace` level and rejected
//! operations at `debug` level through the [`log`] facade. Install any logger
//! in the final binary to see them.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

/// The balanced tree, its nodes and its traversal iterators.
pub mod avl;
mod error;

pub use avl::AvlTree;
pub use error::{TreeError, TreeResult};
