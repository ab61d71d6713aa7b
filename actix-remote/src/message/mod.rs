//! Application message envelopes and reliable delivery bookkeeping.
//!
//! A data channel frame combines an optional acknowledgement with an optional
//! envelope around one already serialized application message.

pub mod delivery;
pub mod envelope;


use bytes::Bytes;

use crate::address::Address;
use crate::error::{CodecResult, PduCodecError};
use crate::proto;

pub use delivery::{Ack, SeqNo};
pub use envelope::{construct_message, construct_pure_ack, decode_message};

/// An application message serialized by the actor system's serializers
///
/// The codec never looks inside `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedMessage {
    /// Identifier of the serializer that produced `message`
    pub serializer_id: i32,
    /// Serialized bytes
    pub message: Bytes,
    /// Type hint for the serializer
    pub manifest: Option<Bytes>,
}

impl SerializedMessage {
    /// Create a serialized message without manifest
    pub fn new(serializer_id: i32, message: impl Into<Bytes>) -> Self {
        Self {
            serializer_id,
            message: message.into(),
            manifest: None,
        }
    }

    /// Attach a manifest
    pub fn with_manifest(mut self, manifest: impl Into<Bytes>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }
}

impl From<&SerializedMessage> for proto::SerializedMessage {
    fn from(msg: &SerializedMessage) -> Self {
        proto::SerializedMessage {
            message: msg.message.clone(),
            serializer_id: msg.serializer_id,
            message_manifest: msg.manifest.clone(),
        }
    }
}

impl From<proto::SerializedMessage> for SerializedMessage {
    fn from(proto: proto::SerializedMessage) -> Self {
        SerializedMessage {
            serializer_id: proto.serializer_id,
            message: proto.message,
            manifest: proto.message_manifest,
        }
    }
}

/// A decoded application envelope
///
/// `H` is the handle type produced by the [`ActorRefResolver`](crate::resolver::ActorRefResolver)
/// used while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<H> {
    /// Resolved recipient
    pub recipient: H,
    /// Address the recipient path points at
    pub recipient_address: Address,
    /// Application payload
    pub serialized_message: SerializedMessage,
    /// Resolved sender, if the message had one
    pub sender_option: Option<H>,
    /// Sequence number, present only for reliably delivered messages
    pub seq_option: Option<SeqNo>,
}

impl<H> Message<H> {
    /// Whether this message takes part in reliable delivery
    pub fn reliable_delivery_enabled(&self) -> bool {
        self.seq_option.is_some()
    }

    /// Sequence number of a reliably delivered message
    pub fn seq(&self) -> CodecResult<SeqNo> {
        self.seq_option.ok_or(PduCodecError::ReliableDeliveryDisabled)
    }
}
