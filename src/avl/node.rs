use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;

use crate::error::{TreeError, TreeResult};

/// An owning edge to a subtree; `None` is the empty subtree.
pub(crate) type Link<T, A> = Option<Box<Node<T, A>, A>>;

/// One stored key and the subtree rooted at it.
///
/// Nodes are only reachable through [`AvlTree::root`](super::AvlTree::root)
/// and the `left`/`right` accessors; they cannot be modified from outside
/// the tree.
pub struct Node<T, A: Allocator> {
    key: T,
    left: Link<T, A>,
    right: Link<T, A>,
    height: usize,
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Node<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T, A: Allocator> Node<T, A> {
    fn leaf(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Root of the subtree of smaller keys, if any.
    pub fn left(&self) -> Option<&Node<T, A>> {
        self.left.as_deref()
    }

    /// Root of the subtree of larger keys, if any.
    pub fn right(&self) -> Option<&Node<T, A>> {
        self.right.as_deref()
    }

    /// Height of the subtree rooted here; a node without children has height 0.
    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn leftmost(&self) -> &Node<T, A> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    pub(crate) fn rightmost(&self) -> &Node<T, A> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    fn update_height(&mut self) {
        let tallest = link_height(&self.left).max(link_height(&self.right));
        // The taller child is at least -1, so the sum is never negative.
        self.height = (tallest + 1) as usize;
    }
}

/// Height of a subtree, with the empty subtree at -1.
fn link_height<T, A: Allocator>(link: &Link<T, A>) -> isize {
    link.as_ref().map_or(-1, |node| node.height as isize)
}

/// Find `key` by descending from `link`.
pub(crate) fn find<'a, T, Q, A>(
    mut link: Option<&'a Node<T, A>>,
    key: &Q,
) -> Option<&'a Node<T, A>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
    A: Allocator,
{
    while let Some(node) = link {
        link = match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

// Rotations
//
// Each primitive rewrites the subtree held in `slot` so that the caller's
// owning edge points at the new subtree root. Heights of the two nodes that
// change position are recomputed, lower node first. A primitive called on a
// subtree without the child it needs leaves the subtree untouched.

/// Promote the left child of the subtree in `slot`.
fn rotate_with_left_child<T, A: Allocator>(slot: &mut Link<T, A>) {
    let Some(mut root) = slot.take() else {
        return;
    };
    let Some(mut pivot) = root.left.take() else {
        *slot = Some(root);
        return;
    };

    log::trace!("rotating: left child promoted (height {})", root.height);

    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();

    *slot = Some(pivot);
}

/// Promote the right child of the subtree in `slot`.
fn rotate_with_right_child<T, A: Allocator>(slot: &mut Link<T, A>) {
    let Some(mut root) = slot.take() else {
        return;
    };
    let Some(mut pivot) = root.right.take() else {
        *slot = Some(root);
        return;
    };

    log::trace!("rotating: right child promoted (height {})", root.height);

    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();

    *slot = Some(pivot);
}

/// Left child is right-heavy: straighten it, then promote it.
fn double_with_left_child<T, A: Allocator>(slot: &mut Link<T, A>) {
    if let Some(root) = slot.as_mut() {
        rotate_with_right_child(&mut root.left);
    }
    rotate_with_left_child(slot);
}

/// Right child is left-heavy: straighten it, then promote it.
fn double_with_right_child<T, A: Allocator>(slot: &mut Link<T, A>) {
    if let Some(root) = slot.as_mut() {
        rotate_with_left_child(&mut root.right);
    }
    rotate_with_right_child(slot);
}

/// Restore the balance of the subtree in `slot` and refresh its height.
///
/// Both children must already be balanced. Safe to call on any subtree,
/// balanced or not, including the empty one.
pub(crate) fn balance<T, A: Allocator>(slot: &mut Link<T, A>) {
    let Some(node) = slot.as_mut() else {
        return;
    };
    let left = link_height(&node.left);
    let right = link_height(&node.right);

    if left - right > 1 {
        // Ties go to the single rotation.
        let outer_heavy = node
            .left
            .as_ref()
            .is_some_and(|child| link_height(&child.left) >= link_height(&child.right));
        if outer_heavy {
            rotate_with_left_child(slot);
        } else {
            double_with_left_child(slot);
        }
    } else if right - left > 1 {
        let outer_heavy = node
            .right
            .as_ref()
            .is_some_and(|child| link_height(&child.right) >= link_height(&child.left));
        if outer_heavy {
            rotate_with_right_child(slot);
        } else {
            double_with_right_child(slot);
        }
    }

    if let Some(node) = slot.as_mut() {
        node.update_height();
    }
}

/// Insert `key` below `slot`, rebalancing every subtree on the way back up.
///
/// On error nothing has been changed.
pub(crate) fn insert<T: Ord, A: Allocator + Clone>(
    slot: &mut Link<T, A>,
    key: T,
    alloc: &A,
) -> TreeResult<()> {
    match slot {
        None => {
            *slot = Some(Box::try_new_in(Node::leaf(key), alloc.clone())?);
            return Ok(());
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, alloc)?,
            Ordering::Greater => insert(&mut node.right, key, alloc)?,
            Ordering::Equal => return Err(TreeError::AlreadyPresent),
        },
    }

    balance(slot);
    Ok(())
}

/// Remove `key` from below `slot`, rebalancing every subtree on the way back up.
///
/// A node with two children keeps its place and takes over the key of its
/// in-order successor, whose node is the one released.
pub(crate) fn remove<T, Q, A>(slot: &mut Link<T, A>, key: &Q) -> TreeResult<()>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
    A: Allocator,
{
    let Some(node) = slot.as_mut() else {
        return Err(TreeError::NotFound);
    };

    match key.cmp(node.key.borrow()) {
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = take_min(&mut node.right) {
                    node.key = successor;
                }
            } else {
                splice_out(slot);
            }
        }
    }

    balance(slot);
    Ok(())
}

/// Detach the smallest key below `slot`.
fn take_min<T, A: Allocator>(slot: &mut Link<T, A>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_none() {
        return splice_out(slot);
    }

    let key = take_min(&mut node.left);
    balance(slot);
    key
}

/// Replace the node in `slot` by its only child, releasing the node.
///
/// The node must not have two children.
fn splice_out<T, A: Allocator>(slot: &mut Link<T, A>) -> Option<T> {
    let mut removed = slot.take()?;
    debug_assert!(removed.left.is_none() || removed.right.is_none());

    *slot = removed.left.take().or_else(|| removed.right.take());
    log::trace!("released node of height {}", removed.height);

    let Node { key, .. } = Box::into_inner(removed);
    Some(key)
}
