//! Encoding and decoding of the data channel container.
//!
//! The container carries an optional [`Ack`] and an optional envelope. Both
//! may travel together, so acknowledgements piggyback on ordinary traffic;
//! a pure ack frame is sent when there is nothing else to carry it.

use bytes::Bytes;
use log::trace;

use crate::address::{serialize_actor_ref, ActorPath, ActorRef, Address};
use crate::error::{CodecResult, PduCodecError};
use crate::message::{Ack, Message, SerializedMessage, SeqNo};
use crate::proto::{self, AckAndEnvelopeContainer, AcknowledgementInfo, RemoteEnvelope};
use crate::resolver::ActorRefResolver;

/// Build a container holding one envelope and, optionally, an acknowledgement
///
/// References that name a host travel with their full address; a host-less
/// recipient is written relative to its own address and a host-less sender
/// relative to `local_address`. Leaving out `seq_option` sends the message
/// outside reliable delivery.
pub fn construct_message(
    local_address: &Address,
    recipient: &dyn ActorRef,
    serialized_message: &SerializedMessage,
    sender_option: Option<&dyn ActorRef>,
    seq_option: Option<SeqNo>,
    ack_option: Option<&Ack>,
) -> Bytes {
    let envelope = RemoteEnvelope {
        recipient: Some(serialize_actor_ref(&recipient.path().address, recipient)),
        message: Some(proto::SerializedMessage::from(serialized_message)),
        sender: sender_option.map(|sender| serialize_actor_ref(local_address, sender)),
        seq: seq_option.map(SeqNo::raw),
    };

    let container = AckAndEnvelopeContainer {
        ack: ack_option.map(AcknowledgementInfo::from),
        envelope: Some(envelope),
    };

    trace!(
        "Encoded message for {} (seq {:?}, ack {:?})",
        recipient.path(), seq_option, ack_option.map(|ack| ack.to_string())
    );
    proto::serialize(&container)
}

/// Build a container holding only an acknowledgement
pub fn construct_pure_ack(ack: &Ack) -> Bytes {
    let container = AckAndEnvelopeContainer {
        ack: Some(AcknowledgementInfo::from(ack)),
        envelope: None,
    };
    trace!("Encoded pure {}", ack);
    proto::serialize(&container)
}

/// Decode a data channel container
///
/// Recipient and sender paths are handed to `resolver` together with
/// `local_address`. Either half of the result may be absent; a container
/// with neither is not an error.
pub fn decode_message<R>(
    raw: Bytes,
    resolver: &R,
    local_address: &Address,
) -> CodecResult<(Option<Ack>, Option<Message<R::Handle>>)>
where
    R: ActorRefResolver + ?Sized,
{
    let container: AckAndEnvelopeContainer = proto::deserialize("AckAndEnvelopeContainer", raw)?;

    let ack_option = container.ack.map(Ack::from);

    let message_option = match container.envelope {
        Some(envelope) => Some(decode_envelope(envelope, resolver, local_address)?),
        None => None,
    };

    trace!(
        "Decoded container (ack: {}, envelope: {})",
        ack_option.is_some(), message_option.is_some()
    );
    Ok((ack_option, message_option))
}

fn decode_envelope<R>(
    envelope: RemoteEnvelope,
    resolver: &R,
    local_address: &Address,
) -> CodecResult<Message<R::Handle>>
where
    R: ActorRefResolver + ?Sized,
{
    let recipient_path = envelope
        .recipient
        .ok_or_else(|| PduCodecError::InvalidFormat("Envelope is missing its recipient".to_string()))?
        .path;
    let serialized_message = envelope
        .message
        .ok_or_else(|| PduCodecError::InvalidFormat("Envelope is missing its message".to_string()))?;

    let recipient_address = ActorPath::parse_with_default(&recipient_path, local_address)?.address;
    let recipient = resolver.resolve(&recipient_path, local_address);
    let sender_option = envelope
        .sender
        .map(|sender| resolver.resolve(&sender.path, local_address));

    Ok(Message {
        recipient,
        recipient_address,
        serialized_message: SerializedMessage::from(serialized_message),
        sender_option,
        seq_option: envelope.seq.map(SeqNo),
    })
}
