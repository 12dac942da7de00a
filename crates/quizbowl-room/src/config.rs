//! Registry configuration.

/// Configuration for a registry actor.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Bounded command channel size. When full, callers wait.
    pub channel_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { channel_size: 64 }
    }
}
