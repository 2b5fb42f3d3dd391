//! Arena-backed binary tree built from a level-order array
//!
//! Slot `i` of the level-order array holds the node whose children sit at
//! `2i + 1` and `2i + 2`; `None` marks an absent node. Present nodes are
//! pushed into the arena in slot order, so node ids follow level order.

use super::{NodeId, StructureError};

/// A single tree node
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Binary tree stored as an arena of nodes
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<NodeId>,
}

impl<T: Clone> BinaryTree<T> {
    /// Build a tree from a level-order array.
    ///
    /// A present node whose parent slot is absent cannot be reached and is
    /// rejected with [`StructureError::OrphanNode`].
    pub fn from_level_order(slots: &[Option<T>]) -> Result<Self, StructureError> {
        let mut ids: Vec<Option<NodeId>> = Vec::with_capacity(slots.len());
        let mut nodes = Vec::new();

        for (index, slot) in slots.iter().enumerate() {
            match slot {
                Some(value) => {
                    if index > 0 && ids[(index - 1) / 2].is_none() {
                        return Err(StructureError::OrphanNode { index });
                    }
                    ids.push(Some(nodes.len()));
                    nodes.push(TreeNode {
                        value: value.clone(),
                        left: None,
                        right: None,
                    });
                }
                None => ids.push(None),
            }
        }

        for (index, id) in ids.iter().enumerate() {
            if let Some(id) = id {
                let left = ids.get(2 * index + 1).copied().flatten();
                let right = ids.get(2 * index + 2).copied().flatten();
                nodes[*id].left = left;
                nodes[*id].right = right;
            }
        }

        let root = ids.first().copied().flatten();
        Ok(BinaryTree { nodes, root })
    }
}

impl<T> BinaryTree<T> {
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.nodes.get(id)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.left)
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.right)
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.left(id).is_none() && self.right(id).is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_order_children() {
        let slots = vec![Some(3i64), Some(11), Some(4), Some(4), Some(-2), None, Some(1)];
        let tree = BinaryTree::from_level_order(&slots).expect("valid tree");

        let root = tree.root().expect("root");
        assert_eq!(tree.value(root), Some(&3));

        let left = tree.left(root).expect("left");
        let right = tree.right(root).expect("right");
        assert_eq!(tree.value(left), Some(&11));
        assert_eq!(tree.value(right), Some(&4));

        assert_eq!(tree.left(right), None);
        let leaf = tree.right(right).expect("right-right");
        assert_eq!(tree.value(leaf), Some(&1));
        assert!(tree.is_leaf(leaf));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_empty_and_null_root() {
        let empty: BinaryTree<i64> = BinaryTree::from_level_order(&[]).expect("empty tree");
        assert!(empty.root().is_none());

        let null_root: BinaryTree<i64> =
            BinaryTree::from_level_order(&[None]).expect("null root");
        assert!(null_root.is_empty());
    }

    #[test]
    fn test_orphan_rejected() {
        let slots = vec![Some(1i64), None, Some(2), Some(9)];
        let err = BinaryTree::from_level_order(&slots).unwrap_err();
        assert_eq!(err, StructureError::OrphanNode { index: 3 });
    }
}
