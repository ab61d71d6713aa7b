//! Protocol data units and the codec entry points.
//!
//! Every frame on an association is an [`AkkaPdu`]. Control frames
//! (associate, disassociate, heartbeat) are handled by [`crate::control`];
//! payload frames carry an opaque data channel container, which
//! [`PduCodec::decode_message`] takes apart.

use bytes::Bytes;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::address::{ActorRef, Address};
use crate::config::CodecConfig;
use crate::control;
use crate::error::{CodecResult, PduCodecError};
use crate::message::{self, Ack, Message, SeqNo, SerializedMessage};
use crate::proto::{self, AkkaProtocolMessage};
use crate::resolver::ActorRefResolver;

/// Information announced by a system opening an association
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandshakeInfo {
    /// Address of the announcing system; host and port must be set
    pub origin: Address,
    /// Unique id of the announcing system incarnation
    pub uid: u32,
    /// Optional shared secret
    pub cookie: Option<String>,
}

impl HandshakeInfo {
    /// Create handshake info without cookie
    pub fn new(origin: Address, uid: u32) -> Self {
        Self {
            origin,
            uid,
            cookie: None,
        }
    }

    /// Attach a cookie
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }
}

/// Why an association ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisassociateReason {
    /// No specific reason given
    Unknown,
    /// The remote system is shutting down
    Shutdown,
    /// The remote system quarantined this one
    Quarantined,
}

/// A decoded protocol data unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AkkaPdu {
    /// Handshake opening an association
    Associate(HandshakeInfo),
    /// Association teardown
    Disassociate(DisassociateReason),
    /// Liveness signal
    Heartbeat,
    /// Data channel frame, decoded further by [`PduCodec::decode_message`]
    Payload(Bytes),
}

/// Wrap `payload` in an outer frame
pub fn construct_payload(payload: Bytes) -> Bytes {
    let frame = AkkaProtocolMessage {
        payload: Some(payload),
        instruction: None,
    };
    proto::serialize(&frame)
}

/// Decode an outer frame
///
/// A payload takes precedence over an instruction; a frame carrying
/// neither is rejected.
pub fn decode_pdu(raw: Bytes) -> CodecResult<AkkaPdu> {
    let frame: AkkaProtocolMessage = proto::deserialize("AkkaProtocolMessage", raw)?;

    match (frame.payload, frame.instruction) {
        (Some(payload), _) => {
            trace!("Decoded payload of {} bytes", payload.len());
            Ok(AkkaPdu::Payload(payload))
        },
        (None, Some(instruction)) => control::decode_control_pdu(instruction),
        (None, None) => Err(PduCodecError::EmptyFrame),
    }
}

/// Encoding and decoding of PDUs for one wire format
pub trait PduCodec {
    /// Build a handshake frame
    fn construct_associate(&self, info: &HandshakeInfo) -> CodecResult<Bytes>;

    /// Build a disassociate frame for `reason`
    fn construct_disassociate(&self, reason: DisassociateReason) -> Bytes;

    /// Build a heartbeat frame
    fn construct_heartbeat(&self) -> Bytes;

    /// Wrap a data channel container in an outer frame
    fn construct_payload(&self, payload: Bytes) -> CodecResult<Bytes>;

    /// Build a data channel container for one message, with an optional piggybacked ack
    fn construct_message(
        &self,
        local_address: &Address,
        recipient: &dyn ActorRef,
        serialized_message: &SerializedMessage,
        sender_option: Option<&dyn ActorRef>,
        seq_option: Option<SeqNo>,
        ack_option: Option<&Ack>,
    ) -> CodecResult<Bytes>;

    /// Build a data channel container holding only an ack
    fn construct_pure_ack(&self, ack: &Ack) -> CodecResult<Bytes>;

    /// Decode an outer frame
    fn decode_pdu(&self, raw: Bytes) -> CodecResult<AkkaPdu>;

    /// Decode a data channel container
    fn decode_message<R>(
        &self,
        raw: Bytes,
        resolver: &R,
        local_address: &Address,
    ) -> CodecResult<(Option<Ack>, Option<Message<R::Handle>>)>
    where
        R: ActorRefResolver + ?Sized;

    /// Encode any PDU by dispatching on its variant
    fn encode_pdu(&self, pdu: &AkkaPdu) -> CodecResult<Bytes> {
        match pdu {
            AkkaPdu::Associate(info) => self.construct_associate(info),
            AkkaPdu::Disassociate(reason) => Ok(self.construct_disassociate(*reason)),
            AkkaPdu::Heartbeat => Ok(self.construct_heartbeat()),
            AkkaPdu::Payload(bytes) => self.construct_payload(bytes.clone()),
        }
    }
}

/// Protocol Buffers implementation of [`PduCodec`]
///
/// Holds only its configuration, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ProtobufCodec {
    config: CodecConfig,
}

impl ProtobufCodec {
    /// Create a codec, validating `config` first
    pub fn new(config: CodecConfig) -> CodecResult<Self> {
        Ok(Self {
            config: config.build()?,
        })
    }

    /// The codec configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn checked(&self, frame: Bytes) -> CodecResult<Bytes> {
        self.config.check_frame_size(frame.len())?;
        Ok(frame)
    }
}

impl PduCodec for ProtobufCodec {
    fn construct_associate(&self, info: &HandshakeInfo) -> CodecResult<Bytes> {
        self.checked(control::construct_associate(info)?)
    }

    fn construct_disassociate(&self, reason: DisassociateReason) -> Bytes {
        control::construct_disassociate(reason)
    }

    fn construct_heartbeat(&self) -> Bytes {
        control::construct_heartbeat()
    }

    fn construct_payload(&self, payload: Bytes) -> CodecResult<Bytes> {
        self.checked(construct_payload(payload))
    }

    fn construct_message(
        &self,
        local_address: &Address,
        recipient: &dyn ActorRef,
        serialized_message: &SerializedMessage,
        sender_option: Option<&dyn ActorRef>,
        seq_option: Option<SeqNo>,
        ack_option: Option<&Ack>,
    ) -> CodecResult<Bytes> {
        self.checked(message::construct_message(
            local_address,
            recipient,
            serialized_message,
            sender_option,
            seq_option,
            ack_option,
        ))
    }

    fn construct_pure_ack(&self, ack: &Ack) -> CodecResult<Bytes> {
        self.checked(message::construct_pure_ack(ack))
    }

    fn decode_pdu(&self, raw: Bytes) -> CodecResult<AkkaPdu> {
        self.config.check_frame_size(raw.len())?;
        decode_pdu(raw)
    }

    fn decode_message<R>(
        &self,
        raw: Bytes,
        resolver: &R,
        local_address: &Address,
    ) -> CodecResult<(Option<Ack>, Option<Message<R::Handle>>)>
    where
        R: ActorRefResolver + ?Sized,
    {
        self.config.check_frame_size(raw.len())?;
        message::decode_message(raw, resolver, local_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{AkkaControlMessage, CommandType};

    #[test]
    fn test_empty_buffer_is_rejected() {
        assert!(matches!(decode_pdu(Bytes::new()), Err(PduCodecError::EmptyFrame)));
    }

    #[test]
    fn test_garbage_is_wrapped() {
        // Field 1 declared as length-delimited with a length past the end
        let garbage = Bytes::from_static(&[0x0A, 0x7F, 0x01]);
        match decode_pdu(garbage) {
            Err(PduCodecError::Decode { frame, .. }) => assert_eq!(frame, "AkkaProtocolMessage"),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_takes_precedence() {
        let frame = AkkaProtocolMessage {
            payload: Some(Bytes::from_static(b"data")),
            instruction: Some(AkkaControlMessage {
                command_type: CommandType::Heartbeat as i32,
                handshake_info: None,
            }),
        };
        let decoded = decode_pdu(proto::serialize(&frame)).unwrap();
        assert_eq!(decoded, AkkaPdu::Payload(Bytes::from_static(b"data")));
    }

    #[test]
    fn test_empty_payload_is_still_a_payload() {
        let frame = construct_payload(Bytes::new());
        assert_eq!(decode_pdu(frame).unwrap(), AkkaPdu::Payload(Bytes::new()));
    }

    #[test]
    fn test_oversized_frames_are_rejected() {
        let codec = ProtobufCodec::default();
        let max = codec.config().maximum_frame_size;

        let big = Bytes::from(vec![0u8; max]);
        assert!(matches!(
            codec.construct_payload(big),
            Err(PduCodecError::FrameTooLarge { .. })
        ));

        let raw = Bytes::from(vec![0u8; max + 1]);
        assert!(matches!(codec.decode_pdu(raw), Err(PduCodecError::FrameTooLarge { .. })));
    }

    #[test]
    fn test_oversized_pure_ack_is_rejected() {
        let codec = ProtobufCodec::default();

        // Each nack costs at least two bytes on the wire
        let nacks: Vec<SeqNo> = (1..=70_000u64).map(|n| SeqNo(n * 2)).collect();
        let ack = Ack::new(SeqNo(1), nacks);
        match codec.construct_pure_ack(&ack) {
            Err(PduCodecError::FrameTooLarge { size, max }) => assert!(size > max),
            other => panic!("Expected FrameTooLarge, got {:?}", other),
        }

        let small = Ack::new(SeqNo(1), vec![SeqNo(3)]);
        assert!(codec.construct_pure_ack(&small).is_ok());
    }

    #[test]
    fn test_new_validates_config() {
        let codec = ProtobufCodec::new(CodecConfig::new().maximum_frame_size(64_000)).unwrap();
        assert_eq!(codec.config().maximum_frame_size, 64_000);

        assert!(matches!(
            ProtobufCodec::new(CodecConfig::new().maximum_frame_size(0)),
            Err(PduCodecError::ConfigurationError(_))
        ));
    }
}
