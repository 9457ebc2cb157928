use super::*;
use std::ops::{Index, IndexMut};

/// Node arena. Freed slots are kept on a free list and handed out again by
/// the next split, so child ids stay small and the vector stops growing once
/// the tree has reached its peak size.
#[derive(Debug)]
pub(crate) struct NodeStorage<K> {
    slots: Vec<Option<Node<K>>>,
    free: Vec<NodeId>,
}

impl<K> NodeStorage<K> {
    pub(crate) fn with_root(root: Node<K>) -> Self {
        Self {
            slots: vec![Some(root)],
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<K>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.index()].is_none());
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    pub(crate) fn free(&mut self, id: NodeId) -> Option<Node<K>> {
        debug_assert!(id != NodeId::ROOT, "the root node is never freed");
        let node = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        Some(node)
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<K>> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline(always)]
    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drops every node but the root and resets the root to an empty leaf.
    pub(crate) fn reset_to_root(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
        if let Some(root) = self.slots[0].as_mut() {
            root.kind = NodeKind::Leaf;
            root.items.clear();
        }
    }
}

impl<K> Index<NodeId> for NodeStorage<K> {
    type Output = Node<K>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node<K> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {} is not live", id),
        }
    }
}

impl<K> IndexMut<NodeId> for NodeStorage<K> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K> {
        match self.slots.get_mut(id.index()).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("node {} is not live", id),
        }
    }
}
