extern crate alloc;
use alloc::vec::Vec;

use allocator_api2::alloc::Allocator;

use super::node::Node;

/// An iterator over the keys of an [`AvlTree`](super::AvlTree) in ascending order.
///
/// This struct is created by the [`in_order`](super::AvlTree::in_order) and
/// [`iter`](super::AvlTree::iter) methods.
pub struct InOrder<'a, T, A: Allocator> {
    stack: Vec<&'a Node<T, A>>,
}

impl<'a, T, A: Allocator> InOrder<'a, T, A> {
    pub(crate) fn new(root: Option<&'a Node<T, A>>) -> Self {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T, A>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T, A: Allocator> Iterator for InOrder<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<T, A: Allocator> Clone for InOrder<'_, T, A> {
    fn clone(&self) -> Self {
        InOrder {
            stack: self.stack.clone(),
        }
    }
}

/// An iterator yielding each key before the keys of its left and then right
/// subtree.
///
/// This struct is created by the [`pre_order`](super::AvlTree::pre_order) method.
pub struct PreOrder<'a, T, A: Allocator> {
    stack: Vec<&'a Node<T, A>>,
}

impl<'a, T, A: Allocator> PreOrder<'a, T, A> {
    pub(crate) fn new(root: Option<&'a Node<T, A>>) -> Self {
        PreOrder {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T, A: Allocator> Iterator for PreOrder<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl<T, A: Allocator> Clone for PreOrder<'_, T, A> {
    fn clone(&self) -> Self {
        PreOrder {
            stack: self.stack.clone(),
        }
    }
}

/// An iterator yielding the keys of the left and then right subtree before
/// the key of their parent.
///
/// This struct is created by the [`post_order`](super::AvlTree::post_order) method.
pub struct PostOrder<'a, T, A: Allocator> {
    // The flag is set once the node's children have been pushed.
    stack: Vec<(&'a Node<T, A>, bool)>,
}

impl<'a, T, A: Allocator> PostOrder<'a, T, A> {
    pub(crate) fn new(root: Option<&'a Node<T, A>>) -> Self {
        PostOrder {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T, A: Allocator> Iterator for PostOrder<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.key());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

impl<T, A: Allocator> Clone for PostOrder<'_, T, A> {
    fn clone(&self) -> Self {
        PostOrder {
            stack: self.stack.clone(),
        }
    }
}
