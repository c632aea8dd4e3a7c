use serde::Deserialize;

/// Settings of [`RouterService`](super::RouterService).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Largest request body collected, in bytes. Larger bodies get `413`.
    pub max_body_size: usize,
    /// Writes the binding error message into the `400` body.
    pub expose_bind_errors: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024,
            expose_bind_errors: true,
        }
    }
}
