use crate::shapes::Bound;
use smallvec::SmallVec;
use std::fmt;

/// Stable index of a node inside a [`QuadTree`](super::QuadTree).
///
/// Ids of collapsed nodes are recycled by later splits, so an id is only
/// meaningful until the next mutation of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(
            index <= u32::MAX as usize,
            "node index {} exceeds max {}",
            index,
            u32::MAX
        );
        NodeId(index as u32)
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Child slot of a split node. The discriminant is the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A node's bound together with its cached half sizes and center.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeExtent {
    pub(crate) bound: Bound,
    pub(crate) half_w: f32,
    pub(crate) half_h: f32,
    pub(crate) cx: f32,
    pub(crate) cy: f32,
}

impl NodeExtent {
    #[inline(always)]
    pub(crate) fn from_bound(bound: Bound) -> Self {
        let half_w = (bound.max_x - bound.min_x) / 2.0;
        let half_h = (bound.max_y - bound.min_y) / 2.0;
        Self {
            bound,
            half_w,
            half_h,
            cx: bound.min_x + half_w,
            cy: bound.min_y + half_h,
        }
    }

    pub(crate) fn child_bound(&self, quadrant: Quadrant) -> Bound {
        let b = &self.bound;
        match quadrant {
            Quadrant::TopRight => Bound::new(self.cx, b.min_y, b.max_x, self.cy),
            Quadrant::TopLeft => Bound::new(b.min_x, b.min_y, self.cx, self.cy),
            Quadrant::BottomLeft => Bound::new(b.min_x, self.cy, self.cx, b.max_y),
            Quadrant::BottomRight => Bound::new(self.cx, self.cy, b.max_x, b.max_y),
        }
    }

    /// Quadrant that wholly holds `bound`, or `None` when it straddles or
    /// touches either center line.
    #[inline]
    pub(crate) fn get_quad(&self, bound: &Bound) -> Option<Quadrant> {
        let is_top = bound.min_y < self.cy && bound.max_y < self.cy;
        let is_left = bound.min_x < self.cx && bound.max_x < self.cx;
        if is_left {
            if is_top {
                return Some(Quadrant::TopLeft);
            } else if bound.min_y > self.cy {
                return Some(Quadrant::BottomLeft);
            }
        } else if bound.min_x > self.cx {
            if is_top {
                return Some(Quadrant::TopRight);
            } else if bound.min_y > self.cy {
                return Some(Quadrant::BottomRight);
            }
        }
        None
    }
}

pub(crate) type NodeStack = SmallVec<[NodeId; 32]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Leaf,
    Branch([NodeId; 4]),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeItem<K> {
    pub(crate) key: K,
    pub(crate) bound: Bound,
}

#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) level: u32,
    pub(crate) extent: NodeExtent,
    pub(crate) parent: Option<NodeId>,
    pub(crate) kind: NodeKind,
    pub(crate) items: Vec<NodeItem<K>>,
}

impl<K> Node<K> {
    pub(crate) fn new(extent: NodeExtent, level: u32, parent: Option<NodeId>) -> Self {
        Self {
            level,
            extent,
            parent,
            kind: NodeKind::Leaf,
            items: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn children(&self) -> Option<[NodeId; 4]> {
        match self.kind {
            NodeKind::Leaf => None,
            NodeKind::Branch(children) => Some(children),
        }
    }

    #[inline(always)]
    pub(crate) fn is_empty_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf && self.items.is_empty()
    }
}

impl<K: PartialEq> Node<K> {
    #[inline]
    pub(crate) fn item_position(&self, key: K) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }
}
