use crate::error::{QuadtreeError, QuadtreeResult};

/// Split policy shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Item count on a leaf that triggers a split.
    pub max_children: usize,
    /// Depth at which nodes stop splitting. The root is level 0.
    pub max_level: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_children: 64,
            max_level: 8,
        }
    }
}

impl Config {
    pub fn validate(&self) -> QuadtreeResult<()> {
        if self.max_children == 0 {
            return Err(QuadtreeError::InvalidConfig {
                max_children: self.max_children,
            });
        }
        Ok(())
    }
}
