//! Sequence numbers and acknowledgements for reliable delivery.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proto::AcknowledgementInfo;

/// Position of a message in a reliable delivery stream
///
/// Ordered by plain unsigned comparison; the counter is not expected to wrap
/// during the lifetime of an association, and [`SeqNo::next`] wraps to zero
/// rather than panicking if it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SeqNo(pub u64);

impl SeqNo {
    /// Create a sequence number
    pub const fn new(raw: u64) -> Self {
        SeqNo(raw)
    }

    /// Raw counter value
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The sequence number following this one, wrapping at `u64::MAX`
    pub fn next(self) -> Self {
        SeqNo(self.0.wrapping_add(1))
    }
}

impl From<u64> for SeqNo {
    fn from(raw: u64) -> Self {
        SeqNo(raw)
    }
}

impl fmt::Display for SeqNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acknowledgement of delivered sequence numbers
///
/// Every sequence number up to and including `cumulative_ack` has been
/// delivered. `nacks` lists numbers above it known to be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Highest sequence number below which everything was received
    pub cumulative_ack: SeqNo,
    /// Missing sequence numbers above `cumulative_ack`
    pub nacks: BTreeSet<SeqNo>,
}

impl Ack {
    /// Create an acknowledgement
    pub fn new(cumulative_ack: SeqNo, nacks: impl IntoIterator<Item = SeqNo>) -> Self {
        Self {
            cumulative_ack,
            nacks: nacks.into_iter().collect(),
        }
    }

    /// Whether `seq` counts as delivered by this acknowledgement
    pub fn acknowledges(&self, seq: SeqNo) -> bool {
        seq <= self.cumulative_ack
    }

    /// Whether `seq` is reported missing
    pub fn is_nacked(&self, seq: SeqNo) -> bool {
        self.nacks.contains(&seq)
    }
}

impl fmt::Display for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ACK[{}, {{", self.cumulative_ack)?;
        for (i, nack) in self.nacks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", nack)?;
        }
        f.write_str("}]")
    }
}

impl From<&Ack> for AcknowledgementInfo {
    fn from(ack: &Ack) -> Self {
        AcknowledgementInfo {
            cumulative_ack: ack.cumulative_ack.raw(),
            nacks: ack.nacks.iter().map(|seq| seq.raw()).collect(),
        }
    }
}

impl From<AcknowledgementInfo> for Ack {
    fn from(info: AcknowledgementInfo) -> Self {
        Ack::new(SeqNo(info.cumulative_ack), info.nacks.into_iter().map(SeqNo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_no_next_wraps() {
        assert_eq!(SeqNo(41).next(), SeqNo(42));
        assert_eq!(SeqNo(u64::MAX).next(), SeqNo(0));
    }

    #[test]
    fn test_seq_no_ordering() {
        assert!(SeqNo(1) < SeqNo(2));
        assert!(SeqNo(0) < SeqNo(u64::MAX));
        assert_eq!(SeqNo(7).next(), SeqNo(8));
        assert_eq!(SeqNo::from(3).raw(), 3);
    }

    #[test]
    fn test_ack_membership() {
        let ack = Ack::new(SeqNo(10), vec![SeqNo(12), SeqNo(15)]);

        assert!(ack.acknowledges(SeqNo(0)));
        assert!(ack.acknowledges(SeqNo(10)));
        assert!(!ack.acknowledges(SeqNo(11)));
        assert!(ack.is_nacked(SeqNo(12)));
        assert!(!ack.is_nacked(SeqNo(13)));
        assert_eq!(ack.to_string(), "ACK[10, {12, 15}]");
    }

    #[test]
    fn test_ack_wire_conversion() {
        let ack = Ack::new(SeqNo(0), vec![SeqNo(3), SeqNo(1)]);
        let info = AcknowledgementInfo::from(&ack);
        assert_eq!(info.cumulative_ack, 0);
        assert_eq!(info.nacks, vec![1, 3]);

        // Duplicates on the wire collapse into the set
        let info = AcknowledgementInfo {
            cumulative_ack: 5,
            nacks: vec![9, 7, 9],
        };
        let ack = Ack::from(info);
        assert_eq!(ack, Ack::new(SeqNo(5), vec![SeqNo(7), SeqNo(9)]));

        let empty = Ack::from(AcknowledgementInfo {
            cumulative_ack: 1,
            nacks: Vec::new(),
        });
        assert!(empty.nacks.is_empty());
        assert_eq!(empty.to_string(), "ACK[1, {}]");
    }
}
