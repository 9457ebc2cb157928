use crate::quadtree::NodeId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("cannot insert an item which already belongs to node {node}")]
    AlreadyAttached { node: NodeId },

    #[error("item is not attached to the tree")]
    NotFound,

    #[error("node {node} is not part of the tree")]
    UnknownNode { node: NodeId },

    #[error(
        "bound must be finite with min <= max (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y})"
    )]
    InvalidBound {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },

    #[error(
        "bound must be within the tree bound (min_x: {min_x}, min_y: {min_y}, max_x: {max_x}, max_y: {max_y}, bounds_min_x: {bounds_min_x}, bounds_min_y: {bounds_min_y}, bounds_max_x: {bounds_max_x}, bounds_max_y: {bounds_max_y})"
    )]
    OutOfBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        bounds_min_x: f32,
        bounds_min_y: f32,
        bounds_max_x: f32,
        bounds_max_y: f32,
    },

    #[error("max_children must be at least 1 (max_children: {max_children})")]
    InvalidConfig { max_children: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
