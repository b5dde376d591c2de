use core::borrow::Borrow;
use core::fmt;

use allocator_api2::alloc::{Allocator, Global};

use crate::error::{TreeError, TreeResult};

mod graphviz;
mod iters;
mod node;


pub use iters::{InOrder, PostOrder, PreOrder};
pub use node::Node;
use node::Link;

/// An ordered set of keys kept in a height-balanced binary search tree.
///
/// After every insertion and removal the heights of the two subtrees of any
/// node differ by at most one, so lookups, insertions and removals take
/// O(log n) steps. Duplicate keys are rejected.
///
/// Every node is allocated separately from `A`. The tree owns a handle to the
/// allocator; pass `&alloc` to share one allocator between several trees.
///
/// # Examples
///
/// ```
/// use allocated_avl::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [5, 3, 8, 1, 4, 7, 9] {
///     tree.insert(key)?;
/// }
///
/// assert_eq!(tree.height(), Some(2));
/// assert_eq!(tree.min()?, &1);
/// assert!(tree.in_order().copied().eq([1, 3, 4, 5, 7, 8, 9]));
///
/// tree.remove(&5)?;
/// assert!(!tree.contains(&5));
/// # Ok::<(), allocated_avl::TreeError>(())
/// ```
pub struct AvlTree<T, A: Allocator + Clone = Global> {
    root: Link<T, A>,
    alloc: A,
}

impl<T> AvlTree<T> {
    /// Create an empty tree using the global allocator.
    #[inline]
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator + Clone> AvlTree<T, A> {
    /// Create an empty tree whose nodes are allocated from `alloc`.
    ///
    /// No memory is allocated until the first key is inserted.
    pub fn new_in(alloc: A) -> Self {
        AvlTree { root: None, alloc }
    }

    /// Build a tree from `keys`, inserting them in iteration order.
    ///
    /// # Errors
    ///
    /// Stops at the first key that is already present or cannot be allocated
    /// and returns that error. Nodes allocated so far are released.
    pub fn try_from_iter_in<I>(keys: I, alloc: A) -> TreeResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new_in(alloc);
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Returns a reference to the tree's allocator.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree.
    ///
    /// The count is not cached; this walks every node.
    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    /// The root node, for walking the tree structure directly.
    pub fn root(&self) -> Option<&Node<T, A>> {
        self.root.as_deref()
    }

    /// Height of the tree: 0 for a single key, `None` when empty.
    pub fn height(&self) -> Option<usize> {
        self.root().map(Node::height)
    }

    /// Add `key` to the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::AlreadyPresent`] if an equal key is stored and
    /// [`TreeError::AllocFailed`] if no node could be allocated. The tree is
    /// unchanged in both cases.
    pub fn insert(&mut self, key: T) -> TreeResult<()>
    where
        T: Ord,
    {
        node::insert(&mut self.root, key, &self.alloc).inspect_err(|err| {
            log::debug!("insert rejected: {err}");
        })
    }

    /// Remove `key` from the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no keys and
    /// [`TreeError::NotFound`] if `key` is not stored. The tree is unchanged
    /// in both cases.
    pub fn remove<Q>(&mut self, key: &Q) -> TreeResult<()>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if self.root.is_none() {
            log::debug!("remove rejected: {}", TreeError::EmptyTree);
            return Err(TreeError::EmptyTree);
        }

        node::remove(&mut self.root, key).inspect_err(|err| {
            log::debug!("remove rejected: {err}");
        })
    }

    /// Returns `true` if `key` is stored in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(self.root(), key).is_some()
    }

    /// Returns a reference to the stored key equal to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(self.root(), key).map(Node::key)
    }

    /// The smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no keys.
    pub fn min(&self) -> TreeResult<&T> {
        self.root()
            .map(|root| root.leftmost().key())
            .ok_or(TreeError::EmptyTree)
    }

    /// The largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no keys.
    pub fn max(&self) -> TreeResult<&T> {
        self.root()
            .map(|root| root.rightmost().key())
            .ok_or(TreeError::EmptyTree)
    }

    /// Keys in pre-order: each node, then its left subtree, then its right.
    pub fn pre_order(&self) -> PreOrder<'_, T, A> {
        PreOrder::new(self.root())
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T, A> {
        InOrder::new(self.root())
    }

    /// Keys in post-order: left subtree, right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T, A> {
        PostOrder::new(self.root())
    }

    /// Keys in ascending order; the same as [`in_order`](Self::in_order).
    pub fn iter(&self) -> InOrder<'_, T, A> {
        self.in_order()
    }

    /// Release every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = None;
    }
}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for AvlTree<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<'s, T, A: Allocator + Clone> IntoIterator for &'s AvlTree<T, A> {
    type IntoIter = InOrder<'s, T, A>;
    type Item = &'s T;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
