mod config;
mod core;
mod maintenance;
mod query_rect;
mod storage;
mod types;

pub use config::Config;
pub use types::{NodeId, Quadrant};

pub(crate) use storage::NodeStorage;
pub(crate) use types::*;

use crate::shapes::Bound;
use fxhash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// Region quadtree over movable axis-aligned items.
///
/// Items are identified by a caller-chosen key. The tree keeps, for every
/// attached key, the node that currently stores it, so `remove`, `update`
/// and `contains` resolve the owner directly instead of searching.
pub struct QuadTree<K = u32> {
    nodes: NodeStorage<K>,
    owners: FxHashMap<K, NodeId>,
    config: Config,
}

impl<K> fmt::Debug for QuadTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("items", &self.owners.len())
            .field("nodes", &self.nodes.live_count())
            .field("bound", &self.nodes[NodeId::ROOT].extent.bound)
            .field("config", &self.config)
            .finish()
    }
}

impl<K> QuadTree<K>
where
    K: Copy + Eq + Hash,
{
    /// Number of attached items.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The root bound every item has to lie in.
    pub fn bound(&self) -> Bound {
        self.nodes[NodeId::ROOT].extent.bound
    }

    pub fn root(&self) -> NodeRef<'_, K> {
        NodeRef {
            tree: self,
            id: NodeId::ROOT,
        }
    }

    /// View of a live node, `None` if `id` was collapsed or never allocated.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.nodes.get(id).map(|_| NodeRef { tree: self, id })
    }

    /// The node currently storing `key`.
    pub fn node_of(&self, key: K) -> Option<NodeId> {
        self.owners.get(&key).copied()
    }

    /// The bound `key` was last inserted or updated with.
    pub fn bound_of(&self, key: K) -> Option<Bound> {
        let node = &self.nodes[*self.owners.get(&key)?];
        node.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.bound)
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id].parent, move |&parent| {
            self.nodes[parent].parent
        })
    }
}

/// Read-only view of one node of a [`QuadTree`].
pub struct NodeRef<'a, K> {
    tree: &'a QuadTree<K>,
    id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.id];
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("level", &node.level)
            .field("bound", &node.extent.bound)
            .field("items", &node.items.len())
            .field("leaf", &(node.kind == NodeKind::Leaf))
            .finish()
    }
}

impl<'a, K> NodeRef<'a, K>
where
    K: Copy + Eq + Hash + 'a,
{
    #[inline(always)]
    fn node(&self) -> &'a Node<K> {
        &self.tree.nodes[self.id]
    }

    fn at(&self, id: NodeId) -> NodeRef<'a, K> {
        NodeRef {
            tree: self.tree,
            id,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn level(&self) -> u32 {
        self.node().level
    }

    pub fn bound(&self) -> Bound {
        self.node().extent.bound
    }

    pub fn center(&self) -> (f32, f32) {
        let extent = &self.node().extent;
        (extent.cx, extent.cy)
    }

    pub fn half_size(&self) -> (f32, f32) {
        let extent = &self.node().extent;
        (extent.half_w, extent.half_h)
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.node().parent.map(|id| self.at(id))
    }

    pub fn is_leaf(&self) -> bool {
        self.node().kind == NodeKind::Leaf
    }

    /// Children in `[TopRight, TopLeft, BottomLeft, BottomRight]` order.
    pub fn children(&self) -> Option<[NodeRef<'a, K>; 4]> {
        self.node()
            .children()
            .map(|children| children.map(|id| self.at(id)))
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeRef<'a, K>> {
        self.node()
            .children()
            .map(|children| self.at(children[quadrant.index()]))
    }

    /// Keys attached directly to this node.
    pub fn items(&self) -> impl Iterator<Item = K> + 'a {
        self.node().items.iter().map(|item| item.key)
    }

    /// On the root, whether `key` is attached anywhere in the tree. On any
    /// other node, whether `key` is attached to this exact node.
    pub fn contains(&self, key: K) -> bool {
        if self.id == NodeId::ROOT {
            return self.tree.contains(key);
        }
        self.tree.owners.get(&key) == Some(&self.id) && self.node().item_position(key).is_some()
    }

    pub fn find<F>(&self, bound: &Bound, mut f: F)
    where
        F: FnMut(K),
    {
        if bound.is_valid() {
            self.tree.find_from(self.id, bound, &mut f);
        }
    }

    pub fn find_into(&self, bound: &Bound, found: &mut Vec<K>) {
        self.find(bound, |key| found.push(key));
    }

    pub fn any<P>(&self, bound: &Bound, mut predicate: P) -> bool
    where
        P: FnMut(K) -> bool,
    {
        bound.is_valid() && self.tree.any_from(self.id, bound, &mut predicate)
    }

    pub fn any_intersecting(&self, bound: &Bound) -> bool {
        self.any(bound, |_| true)
    }

    pub fn scan_node_count(&self) -> usize {
        self.tree.scan_node_count_from(self.id)
    }

    pub fn scan_item_count(&self) -> usize {
        self.tree.scan_item_count_from(self.id)
    }
}
