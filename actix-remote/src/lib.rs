//! Actix Remote Wire Protocol
//!
//! This crate converts between the raw frames exchanged over a remote actor
//! association and their in-memory protocol data units. It covers the
//! control channel (handshake, disassociation, heartbeat) and the data
//! channel, where application messages travel together with the
//! acknowledgements of the reliable delivery layer.
//!
//! Socket I/O, resolving actor paths to live actors and serializing the
//! application messages themselves are left to the caller.

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]
#![warn(missing_docs)]

pub mod address;
pub mod config;
pub mod control;
pub mod error;
pub mod message;
pub mod pdu;
pub mod proto;
pub mod resolver;

pub use address::{ActorPath, ActorRef, Address};
pub use config::CodecConfig;
pub use error::{CodecResult, PduCodecError};
pub use message::{Ack, Message, SeqNo, SerializedMessage};
pub use pdu::{AkkaPdu, DisassociateReason, HandshakeInfo, PduCodec, ProtobufCodec};
pub use resolver::ActorRefResolver;
