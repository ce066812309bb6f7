use crate::models::transfer::Transfer;
use std::fmt;

/// Why a seeding transfer gets stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Some tracker reports more seeders than the threshold
    TooManySeeders(i64),
    /// No tracker reports a leecher
    NoPeers,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::TooManySeeders(seeders) => write!(f, "[{:03}]", seeders),
            StopReason::NoPeers => f.write_str("[nop]"),
        }
    }
}

/// Evaluate the stop policy for one transfer.
///
/// Both conditions are checked independently, so a transfer can yield two
/// reasons. Transfers that are not seeding never yield any.
pub fn evaluate(transfer: &Transfer, seeder_threshold: i64) -> Vec<StopReason> {
    let mut reasons = Vec::with_capacity(2);

    if !transfer.is_seeding() {
        return reasons;
    }

    let seeders = transfer.max_seeders();
    if seeders > seeder_threshold {
        reasons.push(StopReason::TooManySeeders(seeders));
    }

    if !transfer.has_peers() {
        reasons.push(StopReason::NoPeers);
    }

    reasons
}
