//! Addresses and actor paths, and their wire representation.
//!
//! An [`Address`] names an actor system: `protocol://system@host:port`. A
//! purely local address carries no host and no port and cannot be sent over
//! the wire. An [`ActorPath`] is an address followed by the path elements of
//! one actor, e.g. `akka.tcp://sys@10.0.0.1:2552/user/worker`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecResult, PduCodecError};
use crate::proto::{ActorRefData, AddressData};

/// Address of an actor system
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Transport protocol, e.g. `akka.tcp`
    pub protocol: String,
    /// Actor system name
    pub system: String,
    /// Host name, absent for a local address
    pub host: Option<String>,
    /// Port, absent for a local address
    pub port: Option<u16>,
}

impl Address {
    /// Create a local address with no host or port
    pub fn local(protocol: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            system: system.into(),
            host: None,
            port: None,
        }
    }

    /// Create a fully resolved remote address
    pub fn remote(
        protocol: impl Into<String>,
        system: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            protocol: protocol.into(),
            system: system.into(),
            host: Some(host.into()),
            port: Some(port),
        }
    }

    /// Whether this address has both host and port and can be transmitted
    pub fn has_global_scope(&self) -> bool {
        self.host.is_some() && self.port.is_some()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.protocol, self.system)?;
        if let Some(host) = &self.host {
            write!(f, "@{}", host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = PduCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PduCodecError::MalformedPath(format!("Invalid address: {}", s));

        let (protocol, rest) = s.split_once("://").ok_or_else(malformed)?;
        if protocol.is_empty() {
            return Err(malformed());
        }

        let Some((system, authority)) = rest.split_once('@') else {
            if rest.is_empty() || rest.contains(':') {
                return Err(malformed());
            }
            return Ok(Address::local(protocol, rest));
        };

        // rsplit so that bracketed IPv6 hosts keep their colons
        let (host, port) = authority.rsplit_once(':').ok_or_else(malformed)?;
        let port = port.parse::<u16>().map_err(|_| malformed())?;
        if system.is_empty() || host.is_empty() {
            return Err(malformed());
        }

        Ok(Address::remote(protocol, system, host, port))
    }
}

/// Location of one actor: its system address plus path elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorPath {
    /// Address of the actor system hosting the actor
    pub address: Address,
    /// Path elements below the root guardian, e.g. `["user", "worker"]`
    pub elements: Vec<String>,
}

impl ActorPath {
    /// Create a path from an address and `/`-separated elements
    pub fn new(address: Address, path: &str) -> Self {
        Self {
            address,
            elements: split_elements(path),
        }
    }

    /// The path elements rendered as `/a/b`, `/` for the root
    pub fn to_relative_format(&self) -> String {
        if self.elements.is_empty() {
            return "/".to_string();
        }
        let mut out = String::new();
        for element in &self.elements {
            out.push('/');
            out.push_str(element);
        }
        out
    }

    /// The absolute form including the address
    pub fn to_serialization_format(&self) -> String {
        format!("{}{}", self.address, self.to_relative_format())
    }

    /// Parse an absolute path, or complete a relative one (`/a/b`) with `default_address`
    pub fn parse_with_default(path: &str, default_address: &Address) -> CodecResult<Self> {
        if path.starts_with('/') {
            return Ok(ActorPath::new(default_address.clone(), path));
        }
        path.parse()
    }
}

impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_serialization_format())
    }
}

impl FromStr for ActorPath {
    type Err = PduCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scheme_end = s
            .find("://")
            .ok_or_else(|| PduCodecError::MalformedPath(s.to_string()))?;
        let after_scheme = scheme_end + 3;
        let (address, path) = match s[after_scheme..].find('/') {
            Some(idx) => s.split_at(after_scheme + idx),
            None => (s, ""),
        };

        Ok(ActorPath {
            address: address.parse()?,
            elements: split_elements(path),
        })
    }
}

fn split_elements(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect()
}

/// A reference to an actor that can be written to the wire
///
/// Only the path is consumed by the codec.
pub trait ActorRef {
    /// Get the actor path
    fn path(&self) -> &ActorPath;
}

impl ActorRef for ActorPath {
    fn path(&self) -> &ActorPath {
        self
    }
}

/// Serialize an address; fails unless both host and port are set
pub fn serialize_address(address: &Address) -> CodecResult<AddressData> {
    match (&address.host, address.port) {
        (Some(host), Some(port)) => Ok(AddressData {
            system: address.system.clone(),
            hostname: host.clone(),
            port: u32::from(port),
            protocol: Some(address.protocol.clone()),
        }),
        _ => Err(PduCodecError::InvalidAddress(address.to_string())),
    }
}

/// Deserialize an address from its wire form
pub fn deserialize_address(data: AddressData) -> CodecResult<Address> {
    let protocol = data
        .protocol
        .ok_or_else(|| PduCodecError::InvalidFormat("Address is missing its protocol".to_string()))?;
    let port = u16::try_from(data.port)
        .map_err(|_| PduCodecError::InvalidFormat(format!("Port {} out of range", data.port)))?;

    Ok(Address {
        protocol,
        system: data.system,
        host: Some(data.hostname),
        port: Some(port),
    })
}

/// Serialize an actor reference, compacting the path when it is local to `default_address`
///
/// A reference whose address already names a host is written with its full
/// address. A host-less reference belongs to the system at
/// `default_address` and is written as its relative path; the peer
/// completes it from context.
pub fn serialize_actor_ref(default_address: &Address, actor_ref: &dyn ActorRef) -> ActorRefData {
    let path = actor_ref.path();
    let encoded = if path.address.host.is_some() {
        path.to_serialization_format()
    } else {
        log::trace!("Compacting {} relative to {}", path, default_address);
        path.to_relative_format()
    };
    ActorRefData { path: encoded }
}
