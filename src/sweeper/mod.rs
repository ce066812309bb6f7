pub mod policy;

use crate::api::service::TransferService;
use crate::core::config::PolicyConfig;
use crate::core::error::SweepError;
use std::io::Write;
use tracing::{debug, info};

/// Announce the policy before anything touches the network
pub fn write_banner<W: Write>(out: &mut W, policy: &PolicyConfig) -> std::io::Result<()> {
    writeln!(
        out,
        "Pausing all with >{} seeders or no leechers",
        policy.seeder_threshold
    )?;
    out.flush()
}

/// Run one pass over the service's transfers, stopping every seeding
/// transfer the policy flags.
///
/// Each action is written to `out` as it happens, followed by a
/// `Paused <count>` line. Returns the number of stop commands issued; a
/// transfer flagged for both reasons counts twice. The first failing stop
/// aborts the pass.
pub async fn sweep<S, W>(
    service: &mut S,
    policy: &PolicyConfig,
    out: &mut W,
) -> Result<usize, SweepError>
where
    S: TransferService,
    W: Write,
{
    let threshold = policy.seeder_threshold;

    let transfers = service
        .list_transfers()
        .await
        .map_err(SweepError::Connectivity)?;

    info!(transfers = transfers.len(), seeder_threshold = threshold, "Sweeping transfers");

    let mut paused = 0;

    for transfer in &transfers {
        if transfer.is_seeding() {
            for stat in &transfer.tracker_stats {
                debug!(
                    id = transfer.id,
                    tracker = %stat.host,
                    seeders = stat.seeder_count,
                    leechers = stat.leecher_count,
                    "Tracker stats"
                );
            }
        }

        for reason in policy::evaluate(transfer, threshold) {
            writeln!(out, "{} {}", reason, transfer.name)?;

            service
                .stop(transfer.id)
                .await
                .map_err(|source| SweepError::Command {
                    id: transfer.id,
                    name: transfer.name.clone(),
                    source,
                })?;

            debug!(id = transfer.id, name = %transfer.name, reason = %reason, "Transfer stopped");
            paused += 1;
        }
    }

    writeln!(out, "Paused {}", paused)?;
    out.flush()?;

    info!(paused = paused, "Sweep complete");

    Ok(paused)
}
