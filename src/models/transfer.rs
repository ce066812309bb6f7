use serde::Deserialize;
use std::fmt;

/// Transmission's numeric torrent status (`tr_torrent_activity`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum TransferStatus {
    Stopped,
    CheckPending,
    Checking,
    DownloadPending,
    Downloading,
    SeedPending,
    Seeding,
    Unknown(i64),
}

impl From<i64> for TransferStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => TransferStatus::Stopped,
            1 => TransferStatus::CheckPending,
            2 => TransferStatus::Checking,
            3 => TransferStatus::DownloadPending,
            4 => TransferStatus::Downloading,
            5 => TransferStatus::SeedPending,
            6 => TransferStatus::Seeding,
            other => TransferStatus::Unknown(other),
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferStatus::Stopped => f.write_str("stopped"),
            TransferStatus::CheckPending => f.write_str("check pending"),
            TransferStatus::Checking => f.write_str("checking"),
            TransferStatus::DownloadPending => f.write_str("download pending"),
            TransferStatus::Downloading => f.write_str("downloading"),
            TransferStatus::SeedPending => f.write_str("seed pending"),
            TransferStatus::Seeding => f.write_str("seeding"),
            TransferStatus::Unknown(code) => write!(f, "unknown ({code})"),
        }
    }
}

/// One tracker's scrape report for a transfer
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStat {
    #[serde(default)]
    pub host: String,
    /// -1 until the tracker has answered a scrape
    pub seeder_count: i64,
    pub leecher_count: i64,
}

/// Snapshot of a torrent job as reported by `torrent-get`
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Handle used for `torrent-stop`
    pub id: i64,
    pub name: String,
    pub status: TransferStatus,
    #[serde(default)]
    pub tracker_stats: Vec<TrackerStat>,
}

impl TrackerStat {
    pub fn new(seeder_count: i64, leecher_count: i64) -> Self {
        Self {
            host: String::new(),
            seeder_count,
            leecher_count,
        }
    }
}

impl Transfer {
    pub fn new(id: i64, name: &str, status: TransferStatus, tracker_stats: Vec<TrackerStat>) -> Self {
        Self {
            id,
            name: name.to_string(),
            status,
            tracker_stats,
        }
    }

    pub fn is_seeding(&self) -> bool {
        self.status == TransferStatus::Seeding
    }

    /// Highest seeder count reported by any tracker, 0 when none report
    pub fn max_seeders(&self) -> i64 {
        self.tracker_stats
            .iter()
            .map(|stat| stat.seeder_count)
            .max()
            .unwrap_or(0)
    }

    /// Whether any tracker reports at least one leecher
    pub fn has_peers(&self) -> bool {
        self.tracker_stats.iter().any(|stat| stat.leecher_count > 0)
    }
}
