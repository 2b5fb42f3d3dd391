//! Arena-backed singly linked list
//!
//! Nodes live in a `Vec` and refer to their successor by [`NodeId`]. This keeps
//! ownership trivial: algorithms that relink nodes (list reversal) clone the
//! arena and rewrite `next` indices on their private copy.

use super::NodeId;

/// A single list node
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<NodeId>,
}

/// Linked list stored as an arena of nodes
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedList<T> {
    nodes: Vec<ListNode<T>>,
    head: Option<NodeId>,
}

impl<T: Clone> LinkedList<T> {
    /// Build a list whose node `i` holds `values[i]` and links to node `i + 1`
    pub fn from_values(values: &[T]) -> Self {
        let nodes: Vec<ListNode<T>> = values
            .iter()
            .enumerate()
            .map(|(i, value)| ListNode {
                value: value.clone(),
                next: if i + 1 < values.len() { Some(i + 1) } else { None },
            })
            .collect();

        let head = if nodes.is_empty() { None } else { Some(0) };
        LinkedList { nodes, head }
    }

    /// Values in link order starting from the head
    pub fn values(&self) -> Vec<T> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<T> LinkedList<T> {
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn node(&self, id: NodeId) -> Option<&ListNode<T>> {
        self.nodes.get(id)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.next)
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Copy of every node's `next` index, indexed by node id
    pub fn links(&self) -> Vec<Option<NodeId>> {
        self.nodes.iter().map(|n| n.next).collect()
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.next = next;
        }
    }

    pub(crate) fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    /// Walk the list from the head. Stops after `len()` nodes even if the
    /// link table contains a cycle.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            list: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }
}

/// Iterator over `(id, value)` pairs in link order
pub struct ListIter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.list.node(id)?;
        self.current = node.next;
        self.remaining -= 1;
        Some((id, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_links_in_order() {
        let list = LinkedList::from_values(&["a", "b", "c"]);
        assert_eq!(list.head(), Some(0));
        assert_eq!(list.links(), vec![Some(1), Some(2), None]);
        assert_eq!(list.values(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_list() {
        let list: LinkedList<i64> = LinkedList::from_values(&[]);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_relinking_private_copy() {
        let original = LinkedList::from_values(&[1i64, 2, 3]);
        let mut copy = original.clone();
        copy.set_next(0, None);
        copy.set_next(1, Some(0));
        copy.set_next(2, Some(1));
        copy.set_head(Some(2));

        assert_eq!(copy.values(), vec![3, 2, 1]);
        assert_eq!(original.values(), vec![1, 2, 3]);
    }
}
