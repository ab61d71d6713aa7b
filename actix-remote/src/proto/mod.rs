//! Protocol Buffers module for the remoting wire format.
//!
//! The record definitions live in `wire_formats.proto`; the prost output is
//! checked in under `generated/` so building the crate does not need `protoc`.

use bytes::{Buf, Bytes};
use prost::Message;

use crate::error::{CodecResult, PduCodecError};

#[path = "generated/wire_formats.rs"]
#[allow(missing_docs)]
mod wire_formats;

pub use wire_formats::*;

/// Serialize a message using Protocol Buffers
pub fn serialize<T: Message>(message: &T) -> Bytes {
    Bytes::from(message.encode_to_vec())
}

/// Deserialize a message using Protocol Buffers
///
/// `frame` names the record in the error when the bytes are malformed.
pub fn deserialize<T: Message + Default>(frame: &'static str, bytes: impl Buf) -> CodecResult<T> {
    T::decode(bytes).map_err(|e| PduCodecError::decode(frame, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_presence_of_zero_seq() {
        let with_zero = RemoteEnvelope {
            seq: Some(0),
            ..Default::default()
        };
        let without = RemoteEnvelope::default();

        let decoded: RemoteEnvelope = deserialize("RemoteEnvelope", serialize(&with_zero)).unwrap();
        assert_eq!(decoded.seq, Some(0));

        let decoded: RemoteEnvelope = deserialize("RemoteEnvelope", serialize(&without)).unwrap();
        assert_eq!(decoded.seq, None);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let info = AcknowledgementInfo {
            cumulative_ack: 42,
            nacks: vec![44, 45],
        };
        let bytes = serialize(&info);
        let truncated = bytes.slice(0..bytes.len() - 3);

        match deserialize::<AcknowledgementInfo>("AcknowledgementInfo", truncated) {
            Err(PduCodecError::Decode { frame, .. }) => assert_eq!(frame, "AcknowledgementInfo"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }
}
