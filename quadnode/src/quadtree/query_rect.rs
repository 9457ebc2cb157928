use super::*;
use crate::collision_detection::bound_bound;

impl<K> QuadTree<K>
where
    K: Copy + Eq + Hash,
{
    /// Call `f` with every attached key whose bound intersects `bound`.
    /// Bounds that only touch are not reported. A malformed query matches nothing.
    pub fn find<F>(&self, bound: &Bound, f: F)
    where
        F: FnMut(K),
    {
        self.root().find(bound, f);
    }

    pub fn find_into(&self, bound: &Bound, found: &mut Vec<K>) {
        self.root().find_into(bound, found);
    }

    /// Whether some item intersecting `bound` satisfies `predicate`.
    /// Stops at the first match.
    pub fn any<P>(&self, bound: &Bound, predicate: P) -> bool
    where
        P: FnMut(K) -> bool,
    {
        self.root().any(bound, predicate)
    }

    pub fn any_intersecting(&self, bound: &Bound) -> bool {
        self.root().any_intersecting(bound)
    }

    /// Whether `key` is attached, checked against its owning node's item list.
    pub fn contains(&self, key: K) -> bool {
        match self.owners.get(&key) {
            Some(&node_id) => self.nodes[node_id].item_position(key).is_some(),
            None => false,
        }
    }

    pub fn scan_node_count(&self) -> usize {
        self.scan_node_count_from(NodeId::ROOT)
    }

    pub fn scan_item_count(&self) -> usize {
        self.scan_item_count_from(NodeId::ROOT)
    }

    /// Push the bound of every node, root first.
    pub fn all_node_bounds(&self, bounds: &mut Vec<Bound>) {
        let mut stack = NodeStack::new();
        stack.push(NodeId::ROOT);
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id];
            bounds.push(node.extent.bound);
            if let Some(children) = node.children() {
                stack.extend(children.into_iter().rev());
            }
        }
    }

    pub(crate) fn find_from<F>(&self, node_id: NodeId, bound: &Bound, f: &mut F)
    where
        F: FnMut(K),
    {
        let node = &self.nodes[node_id];
        if let Some(children) = node.children() {
            match node.extent.get_quad(bound) {
                Some(quadrant) => self.find_from(children[quadrant.index()], bound, f),
                None => {
                    for child in children {
                        if bound_bound(&self.nodes[child].extent.bound, bound) {
                            self.find_from(child, bound, f);
                        }
                    }
                }
            }
        }
        for item in &node.items {
            if bound_bound(&item.bound, bound) {
                f(item.key);
            }
        }
    }

    pub(crate) fn any_from<P>(&self, node_id: NodeId, bound: &Bound, predicate: &mut P) -> bool
    where
        P: FnMut(K) -> bool,
    {
        let node = &self.nodes[node_id];
        if let Some(children) = node.children() {
            match node.extent.get_quad(bound) {
                Some(quadrant) => {
                    if self.any_from(children[quadrant.index()], bound, predicate) {
                        return true;
                    }
                }
                None => {
                    for child in children {
                        if bound_bound(&self.nodes[child].extent.bound, bound)
                            && self.any_from(child, bound, predicate)
                        {
                            return true;
                        }
                    }
                }
            }
        }
        node.items
            .iter()
            .any(|item| bound_bound(&item.bound, bound) && predicate(item.key))
    }

    pub(crate) fn scan_node_count_from(&self, node_id: NodeId) -> usize {
        let children = match self.nodes[node_id].children() {
            Some(children) => children,
            None => return 1,
        };
        1 + children
            .iter()
            .map(|&child| self.scan_node_count_from(child))
            .sum::<usize>()
    }

    pub(crate) fn scan_item_count_from(&self, node_id: NodeId) -> usize {
        let node = &self.nodes[node_id];
        let nested = node.children().map_or(0, |children| {
            children
                .iter()
                .map(|&child| self.scan_item_count_from(child))
                .sum::<usize>()
        });
        node.items.len() + nested
    }
}
