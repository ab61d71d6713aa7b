//! Configuration module for the PDU codec.

use serde::{Deserialize, Serialize};

use crate::error::{CodecResult, PduCodecError};

/// Default maximum frame size in bytes
pub const DEFAULT_MAXIMUM_FRAME_SIZE: usize = 128_000;

/// Smallest maximum frame size the codec accepts
pub const MIN_FRAME_SIZE: usize = 32_000;

/// Frame sizes above this are accepted but logged
const LARGE_FRAME_SIZE_WARNING: usize = 64 * 1024 * 1024;

/// Codec configuration builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest frame, in bytes, the codec will produce or accept
    pub maximum_frame_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            maximum_frame_size: DEFAULT_MAXIMUM_FRAME_SIZE,
        }
    }
}

impl CodecConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum frame size
    pub fn maximum_frame_size(mut self, size: usize) -> Self {
        self.maximum_frame_size = size;
        self
    }

    /// Load a configuration from its JSON form; missing keys take their defaults
    pub fn from_json(json: &str) -> CodecResult<Self> {
        let config: CodecConfig = serde_json::from_str(json)
            .map_err(|e| PduCodecError::ConfigurationError(format!("Invalid codec config: {}", e)))?;
        config.build()
    }

    /// Validate and build the configuration
    pub fn build(self) -> CodecResult<Self> {
        if self.maximum_frame_size < MIN_FRAME_SIZE {
            return Err(PduCodecError::ConfigurationError(format!(
                "maximum_frame_size must be at least {} bytes, got {}",
                MIN_FRAME_SIZE, self.maximum_frame_size
            )));
        }

        if self.maximum_frame_size > LARGE_FRAME_SIZE_WARNING {
            log::warn!(
                "maximum_frame_size of {} bytes is unusually large, peers may reject such frames",
                self.maximum_frame_size
            );
        }

        Ok(self)
    }

    /// Check a frame length against the configured maximum
    pub(crate) fn check_frame_size(&self, size: usize) -> CodecResult<()> {
        if size > self.maximum_frame_size {
            log::debug!(
                "Rejecting frame of {} bytes, maximum is {}",
                size, self.maximum_frame_size
            );
            return Err(PduCodecError::FrameTooLarge {
                size,
                max: self.maximum_frame_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.maximum_frame_size, DEFAULT_MAXIMUM_FRAME_SIZE);
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_small_frame_size_fails() {
        let config = CodecConfig::new()
            .maximum_frame_size(1024)
            .build();

        assert!(config.is_err());
        match config.unwrap_err() {
            PduCodecError::ConfigurationError(msg) => {
                assert!(msg.contains("at least 32000"));
            },
            _ => panic!("Expected ConfigurationError"),
        }
    }

    #[test]
    fn test_from_json() {
        let config = CodecConfig::from_json(r#"{"maximum_frame_size": 256000}"#).unwrap();
        assert_eq!(config.maximum_frame_size, 256_000);

        // Missing keys fall back to defaults
        let config = CodecConfig::from_json("{}").unwrap();
        assert_eq!(config, CodecConfig::default());

        assert!(CodecConfig::from_json(r#"{"maximum_frame_size": 10}"#).is_err());
        assert!(CodecConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_check_frame_size() {
        let config = CodecConfig::default();
        assert!(config.check_frame_size(DEFAULT_MAXIMUM_FRAME_SIZE).is_ok());

        match config.check_frame_size(DEFAULT_MAXIMUM_FRAME_SIZE + 1) {
            Err(PduCodecError::FrameTooLarge { size, max }) => {
                assert_eq!(size, DEFAULT_MAXIMUM_FRAME_SIZE + 1);
                assert_eq!(max, DEFAULT_MAXIMUM_FRAME_SIZE);
            },
            other => panic!("Expected FrameTooLarge, got {:?}", other),
        }
    }
}
