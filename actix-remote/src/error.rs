//! Error types for the actix-remote crate.

use thiserror::Error;

/// Error raised by any encode or decode operation of the PDU codec.
///
/// Every failure of the codec surfaces as this one type, whatever the root
/// cause, so association logic only has to handle a single error kind.
#[derive(Error, Debug)]
pub enum PduCodecError {
    /// The bytes could not be parsed as the expected protobuf record
    #[error("Decoding {frame} failed: {source}")]
    Decode {
        /// Name of the record that was being decoded
        frame: &'static str,
        /// Underlying protobuf decode error
        #[source]
        source: prost::DecodeError,
    },

    /// Outer frame carried neither a payload nor an instruction
    #[error("Neither message nor control message were contained")]
    EmptyFrame,

    /// A required field was missing or held an out-of-range value
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Control command code outside the known set
    #[error("Unexpected control message code: {0}")]
    UnknownCommand(i32),

    /// Address cannot be serialized because host or port is missing
    #[error("Address is not fully resolved, host and port are required: {0}")]
    InvalidAddress(String),

    /// Actor path or address string could not be parsed
    #[error("Malformed actor path: {0}")]
    MalformedPath(String),

    /// Frame exceeds the configured maximum frame size
    #[error("Frame of {size} bytes exceeds maximum frame size of {max} bytes")]
    FrameTooLarge {
        /// Size of the offending frame
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// Sequence number requested from a message sent without reliable delivery
    #[error("Reliable delivery is not enabled for this message, it has no sequence number")]
    ReliableDeliveryDisabled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl PduCodecError {
    pub(crate) fn decode(frame: &'static str, source: prost::DecodeError) -> Self {
        PduCodecError::Decode { frame, source }
    }
}

/// Type alias for Result with PduCodecError
pub type CodecResult<T> = Result<T, PduCodecError>;
