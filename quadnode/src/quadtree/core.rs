use super::*;
use crate::collision_detection::bound_contains_bound;
use crate::error::{QuadtreeError, QuadtreeResult};
use tracing::{debug, trace};

impl<K> QuadTree<K>
where
    K: Copy + Eq + Hash,
{
    pub fn new(bound: Bound) -> QuadtreeResult<Self> {
        Self::new_with_config(bound, Config::default())
    }

    pub fn new_with_config(bound: Bound, config: Config) -> QuadtreeResult<Self> {
        config.validate()?;
        if !bound.has_area() {
            return Err(invalid_bound(&bound));
        }
        debug!(
            min_x = bound.min_x,
            min_y = bound.min_y,
            max_x = bound.max_x,
            max_y = bound.max_y,
            max_children = config.max_children,
            max_level = config.max_level,
            "created quadtree"
        );
        let root = Node::new(NodeExtent::from_bound(bound), 0, None);
        Ok(Self {
            nodes: NodeStorage::with_root(root),
            owners: FxHashMap::default(),
            config,
        })
    }

    /// Attach `key` with `bound` at the deepest node whose quadrant it fits.
    ///
    /// Fails without touching the tree if `key` is already attached, or if
    /// `bound` is malformed or leaves the root bound.
    pub fn insert(&mut self, key: K, bound: Bound) -> QuadtreeResult<()> {
        if let Some(&node) = self.owners.get(&key) {
            return Err(QuadtreeError::AlreadyAttached { node });
        }
        self.check_item_bound(&bound)?;
        self.insert_into(NodeId::ROOT, NodeItem { key, bound });
        Ok(())
    }

    pub(crate) fn check_item_bound(&self, bound: &Bound) -> QuadtreeResult<()> {
        if !bound.is_valid() {
            return Err(invalid_bound(bound));
        }
        let root = &self.nodes[NodeId::ROOT].extent.bound;
        if !bound_contains_bound(root, bound) {
            return Err(QuadtreeError::OutOfBounds {
                min_x: bound.min_x,
                min_y: bound.min_y,
                max_x: bound.max_x,
                max_y: bound.max_y,
                bounds_min_x: root.min_x,
                bounds_min_y: root.min_y,
                bounds_max_x: root.max_x,
                bounds_max_y: root.max_y,
            });
        }
        Ok(())
    }

    pub(crate) fn insert_into(&mut self, start: NodeId, item: NodeItem<K>) {
        let mut node_id = start;
        while let NodeKind::Branch(children) = self.nodes[node_id].kind {
            match self.nodes[node_id].extent.get_quad(&item.bound) {
                Some(quadrant) => node_id = children[quadrant.index()],
                None => break,
            }
        }

        self.owners.insert(item.key, node_id);
        let node = &mut self.nodes[node_id];
        node.items.push(item);

        if node.kind != NodeKind::Leaf
            || node.level >= self.config.max_level
            || node.items.len() < self.config.max_children
        {
            return;
        }
        self.split(node_id);
    }

    fn split(&mut self, node_id: NodeId) {
        let (extent, level) = {
            let node = &self.nodes[node_id];
            (node.extent, node.level)
        };
        let nodes = &mut self.nodes;
        let children = Quadrant::ALL.map(|quadrant| {
            let child_extent = NodeExtent::from_bound(extent.child_bound(quadrant));
            nodes.alloc(Node::new(child_extent, level + 1, Some(node_id)))
        });

        let node = &mut self.nodes[node_id];
        node.kind = NodeKind::Branch(children);
        let items = std::mem::take(&mut node.items);
        trace!(node = %node_id, level, items = items.len(), "split node");

        let mut straddling = Vec::with_capacity(items.len());
        for item in items {
            match extent.get_quad(&item.bound) {
                Some(quadrant) => self.insert_into(children[quadrant.index()], item),
                None => straddling.push(item),
            }
        }
        self.nodes[node_id].items = straddling;
    }
}

fn invalid_bound(bound: &Bound) -> QuadtreeError {
    QuadtreeError::InvalidBound {
        min_x: bound.min_x,
        min_y: bound.min_y,
        max_x: bound.max_x,
        max_y: bound.max_y,
    }
}
