//! Mining pool data model
//!
//! Defines the pool record received from the remote API, its status enum,
//! and the [`PoolField`] keys used for sorting and column selection.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Pool Status
// ============================================================================

/// Operational status of a pool.
///
/// The set is closed: any other value on the wire fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Online,
    Degraded,
    Offline,
}

impl PoolStatus {
    /// All statuses in display order.
    pub const ALL: [PoolStatus; 3] = [PoolStatus::Online, PoolStatus::Degraded, PoolStatus::Offline];

    /// Wire representation (`online`, `degraded`, `offline`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolStatus::Online => "online",
            PoolStatus::Degraded => "degraded",
            PoolStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(PoolStatus::Online),
            "degraded" => Ok(PoolStatus::Degraded),
            "offline" => Ok(PoolStatus::Offline),
            other => Err(format!("unknown pool status '{}'", other)),
        }
    }
}

// ============================================================================
// Pool Record
// ============================================================================

/// Immutable snapshot of one mining pool as returned by the gateway.
///
/// Records are never patched: a refresh replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolRecord {
    /// Stable identifier. The API sends either a string or a number.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "hashrateTHs")]
    pub hashrate_ths: f64,
    #[serde(rename = "activeWorkers")]
    pub active_workers: u64,
    /// Fraction in [0, 1]
    #[serde(rename = "rejectRate")]
    pub reject_rate: f64,
    pub status: PoolStatus,
    #[serde(rename = "last24hRevenueBTC")]
    pub last_24h_revenue_btc: f64,
    #[serde(rename = "uptimePercent")]
    pub uptime_percent: f64,
    pub location: String,
    #[serde(rename = "feePercent")]
    pub fee_percent: f64,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ============================================================================
// Pool Field
// ============================================================================

/// One field of [`PoolRecord`], addressed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolField {
    Id,
    Name,
    HashrateThs,
    ActiveWorkers,
    RejectRate,
    Status,
    Last24hRevenueBtc,
    UptimePercent,
    Location,
    FeePercent,
}

impl PoolField {
    /// Every field, in record declaration order.
    pub const ALL: [PoolField; 10] = [
        PoolField::Id,
        PoolField::Name,
        PoolField::HashrateThs,
        PoolField::ActiveWorkers,
        PoolField::RejectRate,
        PoolField::Status,
        PoolField::Last24hRevenueBtc,
        PoolField::UptimePercent,
        PoolField::Location,
        PoolField::FeePercent,
    ];

    /// The name used on the wire and in column labels.
    pub fn wire_name(&self) -> &'static str {
        match self {
            PoolField::Id => "id",
            PoolField::Name => "name",
            PoolField::HashrateThs => "hashrateTHs",
            PoolField::ActiveWorkers => "activeWorkers",
            PoolField::RejectRate => "rejectRate",
            PoolField::Status => "status",
            PoolField::Last24hRevenueBtc => "last24hRevenueBTC",
            PoolField::UptimePercent => "uptimePercent",
            PoolField::Location => "location",
            PoolField::FeePercent => "feePercent",
        }
    }

    /// Whether sorting on this field coerces values to numbers.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, PoolField::Name | PoolField::Status | PoolField::Location)
    }

    /// The field following this one in [`PoolField::ALL`], wrapping around.
    pub fn next(&self) -> PoolField {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for PoolField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| format!("unknown pool field '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "7",
        "name": "Alpha",
        "hashrateTHs": 1234.5,
        "activeWorkers": 88,
        "rejectRate": 0.0123,
        "status": "degraded",
        "last24hRevenueBTC": 0.42,
        "uptimePercent": 99.1,
        "location": "Reykjavik",
        "feePercent": 1.5
    }"#;

    #[test]
    fn test_deserialize_pool_record() {
        let pool: PoolRecord = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(pool.id, "7");
        assert_eq!(pool.name, "Alpha");
        assert_eq!(pool.hashrate_ths, 1234.5);
        assert_eq!(pool.active_workers, 88);
        assert_eq!(pool.status, PoolStatus::Degraded);
        assert_eq!(pool.location, "Reykjavik");
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let json = SAMPLE.replace(r#""id": "7""#, r#""id": 7"#);
        let pool: PoolRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(pool.id, "7");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = SAMPLE.replace("degraded", "maintenance");
        let result: Result<PoolRecord, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let pool: PoolRecord = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&pool).unwrap();
        assert_eq!(value["hashrateTHs"], 1234.5);
        assert_eq!(value["last24hRevenueBTC"], 0.42);
        assert_eq!(value["status"], "degraded");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("online".parse::<PoolStatus>(), Ok(PoolStatus::Online));
        assert!("ONLINE".parse::<PoolStatus>().is_err());
    }

    #[test]
    fn test_field_parse_and_numeric() {
        assert_eq!("hashrateTHs".parse::<PoolField>(), Ok(PoolField::HashrateThs));
        assert!("hashrate".parse::<PoolField>().is_err());
        assert!(PoolField::Id.is_numeric());
        assert!(PoolField::Last24hRevenueBtc.is_numeric());
        assert!(!PoolField::Name.is_numeric());
        assert!(!PoolField::Status.is_numeric());
        assert!(!PoolField::Location.is_numeric());
    }

    #[test]
    fn test_field_next_wraps() {
        assert_eq!(PoolField::Id.next(), PoolField::Name);
        assert_eq!(PoolField::FeePercent.next(), PoolField::Id);
    }
}
