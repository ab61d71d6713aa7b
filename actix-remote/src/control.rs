//! Control channel: handshake, disassociation and heartbeat frames.
//!
//! Disassociate and heartbeat frames carry no variable data. They are
//! encoded once on first use and every later call returns a clone of the same
//! [`Bytes`], which shares the original allocation.

use bytes::Bytes;
use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::address::{deserialize_address, serialize_address};
use crate::error::{CodecResult, PduCodecError};
use crate::pdu::{AkkaPdu, DisassociateReason, HandshakeInfo};
use crate::proto::{self, AkkaControlMessage, AkkaHandshakeInfo, AkkaProtocolMessage, CommandType};

static HEARTBEAT_PDU: Lazy<Bytes> = Lazy::new(|| construct_control_message(CommandType::Heartbeat, None));

static DISASSOCIATE_PDU: Lazy<Bytes> =
    Lazy::new(|| construct_control_message(CommandType::Disassociate, None));

static DISASSOCIATE_SHUTTING_DOWN_PDU: Lazy<Bytes> =
    Lazy::new(|| construct_control_message(CommandType::DisassociateShuttingDown, None));

static DISASSOCIATE_QUARANTINED_PDU: Lazy<Bytes> =
    Lazy::new(|| construct_control_message(CommandType::DisassociateQuarantined, None));

/// Build a handshake frame announcing `info`
///
/// The uid is widened to 64 bits with the high half zeroed. Fails when the
/// origin address lacks host or port.
pub fn construct_associate(info: &HandshakeInfo) -> CodecResult<Bytes> {
    let handshake = AkkaHandshakeInfo {
        origin: Some(serialize_address(&info.origin)?),
        uid: u64::from(info.uid),
        cookie: info.cookie.clone(),
    };
    trace!("Encoded associate from {} (uid {})", info.origin, info.uid);
    Ok(construct_control_message(CommandType::Associate, Some(handshake)))
}

/// Frame announcing the end of an association for `reason`
pub fn construct_disassociate(reason: DisassociateReason) -> Bytes {
    match reason {
        DisassociateReason::Unknown => DISASSOCIATE_PDU.clone(),
        DisassociateReason::Shutdown => DISASSOCIATE_SHUTTING_DOWN_PDU.clone(),
        DisassociateReason::Quarantined => DISASSOCIATE_QUARANTINED_PDU.clone(),
    }
}

/// Heartbeat frame
pub fn construct_heartbeat() -> Bytes {
    HEARTBEAT_PDU.clone()
}

fn construct_control_message(command: CommandType, handshake_info: Option<AkkaHandshakeInfo>) -> Bytes {
    let frame = AkkaProtocolMessage {
        payload: None,
        instruction: Some(AkkaControlMessage {
            command_type: command as i32,
            handshake_info,
        }),
    };
    proto::serialize(&frame)
}

/// Decode the instruction part of an outer frame
pub fn decode_control_pdu(control: AkkaControlMessage) -> CodecResult<AkkaPdu> {
    let command = CommandType::from_i32(control.command_type)
        .ok_or(PduCodecError::UnknownCommand(control.command_type))?;

    let pdu = match command {
        CommandType::Associate => {
            let info = control.handshake_info.ok_or_else(|| {
                PduCodecError::InvalidFormat("Associate message must contain handshake info".to_string())
            })?;
            AkkaPdu::Associate(decode_handshake_info(info)?)
        },
        CommandType::Disassociate => AkkaPdu::Disassociate(DisassociateReason::Unknown),
        CommandType::DisassociateShuttingDown => AkkaPdu::Disassociate(DisassociateReason::Shutdown),
        CommandType::DisassociateQuarantined => AkkaPdu::Disassociate(DisassociateReason::Quarantined),
        CommandType::Heartbeat => AkkaPdu::Heartbeat,
    };

    trace!("Decoded control message {}", command.as_str_name());
    Ok(pdu)
}

fn decode_handshake_info(info: AkkaHandshakeInfo) -> CodecResult<HandshakeInfo> {
    let origin = info
        .origin
        .ok_or_else(|| PduCodecError::InvalidFormat("Handshake info is missing its origin".to_string()))?;

    // Only the low 32 bits of the uid are meaningful in this protocol version
    if info.uid >> 32 != 0 {
        debug!("Discarding high bits of handshake uid {:#x}", info.uid);
    }

    Ok(HandshakeInfo {
        origin: deserialize_address(origin)?,
        uid: info.uid as u32,
        cookie: info.cookie,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    fn origin() -> Address {
        Address::remote("akka.tcp", "origin", "192.168.1.10", 2552)
    }

    fn decode(frame: Bytes) -> CodecResult<AkkaPdu> {
        let outer: AkkaProtocolMessage = proto::deserialize("AkkaProtocolMessage", frame)?;
        decode_control_pdu(outer.instruction.expect("control frame"))
    }

    #[test]
    fn test_disassociate_frames_are_cached() {
        for reason in [
            DisassociateReason::Unknown,
            DisassociateReason::Shutdown,
            DisassociateReason::Quarantined,
        ] {
            let first = construct_disassociate(reason);
            let second = construct_disassociate(reason);
            assert_eq!(first, second);
            assert_eq!(first.as_ptr(), second.as_ptr());
            assert_eq!(decode(first).unwrap(), AkkaPdu::Disassociate(reason));
        }

        let heartbeat = construct_heartbeat();
        assert_eq!(heartbeat.as_ptr(), construct_heartbeat().as_ptr());
        assert_eq!(decode(heartbeat).unwrap(), AkkaPdu::Heartbeat);
    }

    #[test]
    fn test_disassociate_frames_are_distinct() {
        let unknown = construct_disassociate(DisassociateReason::Unknown);
        let shutdown = construct_disassociate(DisassociateReason::Shutdown);
        let quarantined = construct_disassociate(DisassociateReason::Quarantined);

        assert_ne!(unknown, shutdown);
        assert_ne!(shutdown, quarantined);
        assert_ne!(unknown, quarantined);
        assert_ne!(unknown, construct_heartbeat());
    }

    #[test]
    fn test_associate_round_trip() {
        let info = HandshakeInfo::new(origin(), 0xDEAD_BEEF).with_cookie("secret");
        let frame = construct_associate(&info).unwrap();
        assert_eq!(decode(frame).unwrap(), AkkaPdu::Associate(info));
    }

    #[test]
    fn test_associate_requires_resolved_origin() {
        let info = HandshakeInfo::new(Address::local("akka.tcp", "origin"), 1);
        assert!(matches!(construct_associate(&info), Err(PduCodecError::InvalidAddress(_))));
    }

    #[test]
    fn test_associate_without_handshake_info_fails() {
        let control = AkkaControlMessage {
            command_type: CommandType::Associate as i32,
            handshake_info: None,
        };
        match decode_control_pdu(control) {
            Err(PduCodecError::InvalidFormat(msg)) => assert!(msg.contains("handshake info")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_uid_high_bits_are_truncated() {
        let control = AkkaControlMessage {
            command_type: CommandType::Associate as i32,
            handshake_info: Some(AkkaHandshakeInfo {
                origin: Some(serialize_address(&origin()).unwrap()),
                uid: 0x0000_0001_0000_002A,
                cookie: None,
            }),
        };
        match decode_control_pdu(control).unwrap() {
            AkkaPdu::Associate(info) => {
                assert_eq!(info.uid, 42);
                assert_eq!(info.cookie, None);
            },
            other => panic!("Expected Associate, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        for code in [0, 6, 42, -1] {
            let control = AkkaControlMessage {
                command_type: code,
                handshake_info: None,
            };
            match decode_control_pdu(control) {
                Err(PduCodecError::UnknownCommand(c)) => assert_eq!(c, code),
                other => panic!("Expected UnknownCommand, got {:?}", other),
            }
        }
    }
}
