/// Default nesting limit for rendering.
pub const DEFAULT_MAX_DEPTH: usize = 65_536;

/// Configuration for rendering expression trees.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum node nesting depth. Deeper trees fail with `EqlError::DepthExceeded`.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
