//! Error taxonomy shared by every fallible tree operation.

use thiserror::Error;

/// Errors reported by [`AvlTree`](crate::AvlTree) operations.
///
/// A failed operation never changes the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TreeError {
    /// `insert` was called with a key that is already stored.
    #[error("element already present in the tree")]
    AlreadyPresent,
    /// `remove` was called with a key that is not stored.
    #[error("element not found in the tree")]
    NotFound,
    /// The operation needs at least one key but the tree has no root.
    #[error("the tree is empty")]
    EmptyTree,
    /// The allocator could not provide memory for a new node.
    #[error("failed to allocate a tree node")]
    AllocFailed,
}

impl From<allocator_api2::alloc::AllocError> for TreeError {
    fn from(_: allocator_api2::alloc::AllocError) -> Self {
        TreeError::AllocFailed
    }
}

/// Result alias used throughout the crate.
pub type TreeResult<T> = Result<T, TreeError>;
