//! Tree configuration.

use crate::error::ConfigError;

/// The two control bytes a tree interprets inside patterns.
///
/// A pattern segment that contains `param_marker` captures everything from
/// the marker up to the next `separator` (or the end of the key) at match
/// time. Both bytes must be ASCII and distinct.
///
/// # Example
///
/// ```rust
/// use radix_core::TreeConfig;
///
/// let config = TreeConfig::default();
/// assert_eq!(config.param_marker, b':');
/// assert_eq!(config.separator, b'/');
///
/// let dotted = TreeConfig::new(b'$', b'.');
/// assert!(dotted.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Byte that starts a parameter token.
    pub param_marker: u8,
    /// Byte that ends a parameter token.
    pub separator: u8,
}

impl TreeConfig {
    /// Default parameter marker.
    pub const DEFAULT_MARKER: u8 = b':';
    /// Default segment separator.
    pub const DEFAULT_SEPARATOR: u8 = b'/';

    /// Create a configuration with the given marker and separator.
    pub const fn new(param_marker: u8, separator: u8) -> Self {
        Self {
            param_marker,
            separator,
        }
    }

    /// Check that both bytes are ASCII and distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for byte in [self.param_marker, self.separator] {
            if !byte.is_ascii() {
                return Err(ConfigError::NonAscii(byte));
            }
        }
        if self.param_marker == self.separator {
            return Err(ConfigError::MarkerIsSeparator(self.separator));
        }
        Ok(())
    }

    /// Returns true if `pos` lies inside a parameter token of `key`.
    ///
    /// That is: some byte between the last separator before `pos` and `pos`
    /// is the marker, so the bytes leading up to `pos` are part of a
    /// parameter name.
    pub fn in_param_token(&self, key: &[u8], pos: usize) -> bool {
        key[..pos]
            .iter()
            .rev()
            .take_while(|&&b| b != self.separator)
            .any(|&b| b == self.param_marker)
    }

    /// Number of bytes before the next separator (or the end of `bytes`).
    ///
    /// Applied to a pattern at a marker this is the length of the parameter
    /// token, marker included; applied to a queried key it is the length of
    /// the value a parameter captures there.
    pub fn segment_len(&self, bytes: &[u8]) -> usize {
        bytes
            .iter()
            .position(|&b| b == self.separator)
            .unwrap_or(bytes.len())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARKER, Self::DEFAULT_SEPARATOR)
    }
}
