/// Outer frame: exactly one of payload or instruction is set
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AkkaProtocolMessage {
    #[prost(bytes = "bytes", optional, tag = "1")]
    pub payload: ::core::option::Option<::prost::bytes::Bytes>,
    #[prost(message, optional, tag = "2")]
    pub instruction: ::core::option::Option<AkkaControlMessage>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AkkaControlMessage {
    #[prost(enumeration = "CommandType", required, tag = "1")]
    pub command_type: i32,
    #[prost(message, optional, tag = "2")]
    pub handshake_info: ::core::option::Option<AkkaHandshakeInfo>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AkkaHandshakeInfo {
    #[prost(message, optional, tag = "1")]
    pub origin: ::core::option::Option<AddressData>,
    #[prost(fixed64, required, tag = "2")]
    pub uid: u64,
    #[prost(string, optional, tag = "3")]
    pub cookie: ::core::option::Option<::prost::alloc::string::String>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddressData {
    #[prost(string, required, tag = "1")]
    pub system: ::prost::alloc::string::String,
    #[prost(string, required, tag = "2")]
    pub hostname: ::prost::alloc::string::String,
    #[prost(uint32, required, tag = "3")]
    pub port: u32,
    #[prost(string, optional, tag = "4")]
    pub protocol: ::core::option::Option<::prost::alloc::string::String>,
}
/// Data channel frame carried in AkkaProtocolMessage.payload
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AckAndEnvelopeContainer {
    #[prost(message, optional, tag = "1")]
    pub ack: ::core::option::Option<AcknowledgementInfo>,
    #[prost(message, optional, tag = "2")]
    pub envelope: ::core::option::Option<RemoteEnvelope>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AcknowledgementInfo {
    #[prost(fixed64, required, tag = "1")]
    pub cumulative_ack: u64,
    #[prost(fixed64, repeated, packed = "false", tag = "2")]
    pub nacks: ::prost::alloc::vec::Vec<u64>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoteEnvelope {
    #[prost(message, optional, tag = "1")]
    pub recipient: ::core::option::Option<ActorRefData>,
    #[prost(message, optional, tag = "2")]
    pub message: ::core::option::Option<SerializedMessage>,
    #[prost(message, optional, tag = "4")]
    pub sender: ::core::option::Option<ActorRefData>,
    #[prost(fixed64, optional, tag = "5")]
    pub seq: ::core::option::Option<u64>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActorRefData {
    #[prost(string, required, tag = "1")]
    pub path: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SerializedMessage {
    #[prost(bytes = "bytes", required, tag = "1")]
    pub message: ::prost::bytes::Bytes,
    #[prost(int32, required, tag = "2")]
    pub serializer_id: i32,
    #[prost(bytes = "bytes", optional, tag = "3")]
    pub message_manifest: ::core::option::Option<::prost::bytes::Bytes>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CommandType {
    Associate = 1,
    Disassociate = 2,
    Heartbeat = 3,
    DisassociateShuttingDown = 4,
    DisassociateQuarantined = 5,
}
impl CommandType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            CommandType::Associate => "ASSOCIATE",
            CommandType::Disassociate => "DISASSOCIATE",
            CommandType::Heartbeat => "HEARTBEAT",
            CommandType::DisassociateShuttingDown => "DISASSOCIATE_SHUTTING_DOWN",
            CommandType::DisassociateQuarantined => "DISASSOCIATE_QUARANTINED",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ASSOCIATE" => Some(Self::Associate),
            "DISASSOCIATE" => Some(Self::Disassociate),
            "HEARTBEAT" => Some(Self::Heartbeat),
            "DISASSOCIATE_SHUTTING_DOWN" => Some(Self::DisassociateShuttingDown),
            "DISASSOCIATE_QUARANTINED" => Some(Self::DisassociateQuarantined),
            _ => None,
        }
    }
}
