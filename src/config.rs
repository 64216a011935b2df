//! Renderer configuration.
//!
//! Loaded from TOML; every field is optional.
//!
//! ```toml
//! width = 100
//! height = 30
//! hide_cursor = true
//! synchronized_output = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pipeline::terminal::detect_terminal_size;

/// Settings consumed by [`Renderer`](crate::pipeline::Renderer).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Fixed terminal width; detected when unset.
    pub width: Option<u16>,
    /// Fixed terminal height; detected when unset.
    pub height: Option<u16>,
    /// Emit `CSI ?25l` before the first frame.
    pub hide_cursor: bool,
    /// Wrap every frame in `CSI ?2026h` / `CSI ?2026l`.
    pub synchronized_output: bool,
    /// Emit `CSI 2J CSI H` before the first frame.
    pub clear_on_first_render: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            hide_cursor: false,
            synchronized_output: false,
            clear_on_first_render: true,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading render config");
        Self::from_toml_str(&source)
    }

    /// Configuration with a fixed size, used by tests and headless renders.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Effective `(width, height)`, filling unset fields from the terminal.
    pub fn resolve_size(&self) -> (u16, u16) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (w, h) => {
                let (tw, th) = detect_terminal_size();
                (w.unwrap_or(tw), h.unwrap_or(th))
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.width == Some(0) {
            return Err(Error::Config("width must be at least 1".into()));
        }
        if self.height == Some(0) {
            return Err(Error::Config("height must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert!(config.clear_on_first_render);
        assert!(!config.synchronized_output);
    }

    #[test]
    fn test_partial_document() {
        let config = RenderConfig::from_toml_str("width = 40\nhide_cursor = true\n").unwrap();
        assert_eq!(config.width, Some(40));
        assert_eq!(config.height, None);
        assert!(config.hide_cursor);
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = RenderConfig::from_toml_str("height = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = RenderConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_fixed_size_resolves_without_terminal() {
        assert_eq!(RenderConfig::with_size(20, 5).resolve_size(), (20, 5));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = RenderConfig::load("/nonexistent/flint.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
