//! Backend selection settings supplied by the embedding application.

use crate::backend::BackendKind;

/// How a [`crate::codec::Codec`] should choose its backend.
///
/// The library never probes its host. Applications running somewhere native
/// code must not be used (a browser, a sandbox) set
/// [`restricted_host`](CodecConfig::restricted_host) instead.
///
/// ```
/// use bigint_buffer::{BackendKind, CodecConfig};
///
/// let config = CodecConfig::new()
///     .backend(BackendKind::Accelerated)
///     .restricted_host(false);
/// assert_eq!(config.backend, BackendKind::Accelerated);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Preferred backend. `Accelerated` falls back to `Portable` when it is
    /// not available.
    pub backend: BackendKind,
    /// Force the portable backend regardless of `backend`.
    pub restricted_host: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Accelerated,
            restricted_host: false,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend(mut self, kind: BackendKind) -> Self {
        self.backend = kind;
        self
    }

    pub fn restricted_host(mut self, restricted: bool) -> Self {
        self.restricted_host = restricted;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_accelerated() {
        let c = CodecConfig::default();
        assert_eq!(c.backend, BackendKind::Accelerated);
        assert!(!c.restricted_host);
        assert_eq!(CodecConfig::new(), c);
    }

    #[test]
    fn builder_sets_fields() {
        let c = CodecConfig::new()
            .backend(BackendKind::Portable)
            .restricted_host(true);
        assert_eq!(c.backend, BackendKind::Portable);
        assert!(c.restricted_host);
    }
}
