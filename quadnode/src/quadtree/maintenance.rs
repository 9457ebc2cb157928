use super::*;
use crate::collision_detection::bound_strictly_contains_bound;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::{debug, trace};

impl<K> QuadTree<K>
where
    K: Copy + Eq + Hash,
{
    /// Detach `key` and collapse whatever part of the tree it leaves empty.
    /// Returns the bound the item was stored with.
    pub fn remove(&mut self, key: K) -> QuadtreeResult<Bound> {
        let node_id = *self.owners.get(&key).ok_or(QuadtreeError::NotFound)?;
        let item = self.detach(node_id, key)?;
        self.cleanup(node_id);
        Ok(item.bound)
    }

    fn detach(&mut self, node_id: NodeId, key: K) -> QuadtreeResult<NodeItem<K>> {
        let node = &mut self.nodes[node_id];
        let index = node.item_position(key).ok_or(QuadtreeError::NotFound)?;
        let item = node.items.remove(index);
        self.owners.remove(&key);
        Ok(item)
    }

    /// Walk up from `start`, turning every node whose subtree holds no items
    /// back into a leaf. The root is demoted too but never freed.
    pub(crate) fn cleanup(&mut self, start: NodeId) {
        let mut node_id = start;
        loop {
            let node = &self.nodes[node_id];
            if !node.items.is_empty() {
                return;
            }
            let parent = node.parent;
            if let Some(children) = node.children() {
                if children.iter().any(|&child| !self.nodes[child].is_empty_leaf()) {
                    return;
                }
                for child in children {
                    self.nodes.free(child);
                }
                self.nodes[node_id].kind = NodeKind::Leaf;
                trace!(node = %node_id, "collapsed empty children");
            }
            match parent {
                Some(parent) => node_id = parent,
                None => return,
            }
        }
    }

    /// Store a new bound for `key`, moving it if it left its node.
    ///
    /// The item stays put while the bound is strictly inside its current
    /// node. Otherwise it is detached and re-inserted from the closest
    /// ancestor that strictly contains the new bound, falling back to the
    /// root. The new bound is validated before anything changes.
    pub fn update(&mut self, key: K, bound: Bound) -> QuadtreeResult<()> {
        self.check_item_bound(&bound)?;
        let node_id = *self.owners.get(&key).ok_or(QuadtreeError::NotFound)?;

        let node = &mut self.nodes[node_id];
        let index = node.item_position(key).ok_or(QuadtreeError::NotFound)?;
        if node.parent.is_none() || bound_strictly_contains_bound(&node.extent.bound, &bound) {
            node.items[index].bound = bound;
            return Ok(());
        }

        // Parent first, root last. Cleanup may free a run of these starting
        // from the parent, so the target is picked against the pre-cleanup
        // shape and then raised to the first survivor.
        let ancestors: NodeStack = self.ancestors(node_id).collect();
        let fit = ancestors
            .iter()
            .position(|&id| bound_strictly_contains_bound(&self.nodes[id].extent.bound, &bound))
            .unwrap_or(ancestors.len() - 1);

        self.detach(node_id, key)?;
        self.cleanup(node_id);

        let live = ancestors
            .iter()
            .position(|&id| self.nodes.is_live(id))
            .unwrap_or(ancestors.len() - 1);
        let target = ancestors[fit.max(live)];
        trace!(from = %node_id, to = %target, "relocating item");
        self.insert_into(target, NodeItem { key, bound });
        Ok(())
    }

    /// Detach every item and drop every node below the root.
    pub fn clear(&mut self) {
        debug!(items = self.owners.len(), "clearing quadtree");
        self.owners.clear();
        self.nodes.reset_to_root();
    }

    /// Detach every item stored in the subtree of `id` and turn `id` into an
    /// empty leaf, then collapse the ancestors this leaves empty. Returns the
    /// number of detached items.
    pub fn clear_node(&mut self, id: NodeId) -> QuadtreeResult<usize> {
        if !self.nodes.is_live(id) {
            return Err(QuadtreeError::UnknownNode { node: id });
        }
        if id == NodeId::ROOT {
            let detached = self.owners.len();
            self.clear();
            return Ok(detached);
        }

        let mut detached = 0;
        let mut stack = NodeStack::new();
        stack.push(id);
        while let Some(node_id) = stack.pop() {
            let node = &mut self.nodes[node_id];
            let kind = std::mem::replace(&mut node.kind, NodeKind::Leaf);
            for item in node.items.drain(..) {
                self.owners.remove(&item.key);
                detached += 1;
            }
            if let NodeKind::Branch(children) = kind {
                stack.extend(children);
            }
            if node_id != id {
                self.nodes.free(node_id);
            }
        }
        debug!(node = %id, items = detached, "cleared node");
        self.cleanup(id);
        Ok(detached)
    }
}
