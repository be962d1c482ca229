//! Utilities to traverse the KDTree structure.

use tinyvec::TinyVec;

use crate::constants::SEARCH_STACK_INLINE;
use crate::kdtree::SpatialObject;
use crate::r#type::IndexableNum;

/// A node in the KDTree.
///
/// Each node stores exactly one object. Interior nodes also record the axis their children are
/// split over: objects in the left subtree have a coordinate on that axis no greater than this
/// node's, objects in the right subtree no smaller.
#[derive(Debug, Clone, PartialEq)]
pub struct KDNode<N: IndexableNum, const D: usize> {
    pub(crate) object: SpatialObject<N, D>,

    /// `None` for a leaf.
    pub(crate) split_axis: Option<usize>,

    pub(crate) left: Option<Box<KDNode<N, D>>>,
    pub(crate) right: Option<Box<KDNode<N, D>>>,
}

impl<N: IndexableNum, const D: usize> KDNode<N, D> {
    pub(crate) fn leaf(object: SpatialObject<N, D>) -> Self {
        Self {
            object,
            split_axis: None,
            left: None,
            right: None,
        }
    }

    /// The object stored at this node.
    #[inline]
    pub fn object(&self) -> &SpatialObject<N, D> {
        &self.object
    }

    /// The axis the children of this node are split over, or `None` for a leaf.
    #[inline]
    pub fn split_axis(&self) -> Option<usize> {
        self.split_axis
    }

    /// The child holding objects that sorted before this node's object.
    pub fn left(&self) -> Option<&KDNode<N, D>> {
        self.left.as_deref()
    }

    /// The child holding objects that sorted after this node's object.
    pub fn right(&self) -> Option<&KDNode<N, D>> {
        self.right.as_deref()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.split_axis.is_none()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// Number of levels in the subtree rooted here.
    pub fn depth(&self) -> usize {
        let left = self.left().map_or(0, KDNode::depth);
        let right = self.right().map_or(0, KDNode::depth);
        1 + left.max(right)
    }
}

/// Pre-order iterator over every object below a node.
///
/// Created by [`KDTree::iter`][crate::kdtree::KDTree::iter].
#[derive(Debug, Clone)]
pub struct Objects<'a, N: IndexableNum, const D: usize> {
    stack: TinyVec<[Option<&'a KDNode<N, D>>; SEARCH_STACK_INLINE]>,
}

impl<'a, N: IndexableNum, const D: usize> Objects<'a, N, D> {
    pub(crate) fn new(root: Option<&'a KDNode<N, D>>) -> Self {
        let mut stack = TinyVec::new();
        if root.is_some() {
            stack.push(root);
        }
        Self { stack }
    }
}

impl<'a, N: IndexableNum, const D: usize> Iterator for Objects<'a, N, D> {
    type Item = &'a SpatialObject<N, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop().flatten()?;

        // Note: pushed in backwards order to what gets popped
        if let Some(right) = node.right() {
            self.stack.push(Some(right));
        }
        if let Some(left) = node.left() {
            self.stack.push(Some(left));
        }
        Some(&node.object)
    }
}
