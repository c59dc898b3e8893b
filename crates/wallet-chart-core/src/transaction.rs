// File: crates/wallet-chart-core/src/transaction.rs
// Summary: Externally-owned transaction record and its signed balance effect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// What a transaction did from this wallet's point of view. The feed encodes
/// amounts as unsigned magnitudes; the action tag carries the direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxAction {
    Sent,
    Received,
    Mined,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Success,
}

/// One row of the transaction-history feed. Owned by the history service;
/// this crate only reads it.
///
/// `timestamp` is `None` when the feed value did not parse; such records are
/// excluded from reconstruction entirely rather than erroring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    #[serde(default, deserialize_with = "de_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Unsigned magnitude; see [`TransactionRecord::effect`].
    pub amount: f64,
    pub action: TxAction,
    #[serde(default)]
    pub counterparty: Option<String>,
    pub status: TxStatus,
}

impl TransactionRecord {
    /// Signed contribution of this transaction to the wallet balance:
    /// incoming actions add the amount, `Sent` removes it.
    pub fn effect(&self) -> f64 {
        match self.action {
            TxAction::Sent => -self.amount,
            TxAction::Received | TxAction::Mined => self.amount,
        }
    }
}

/// Lenient timestamp field: accepts RFC 3339 strings, epoch seconds and
/// epoch milliseconds; anything else (null, missing, garbage) maps to `None`.
fn de_timestamp<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(de)? {
        Some(Raw::Int(n)) => from_epoch(n),
        Some(Raw::Float(f)) => from_epoch(f as i64),
        Some(Raw::Text(s)) => parse_text(&s),
        _ => None,
    })
}

// Feeds mix epoch seconds and milliseconds; anything past ~2001-09 in
// milliseconds is unambiguous.
fn from_epoch(n: i64) -> Option<DateTime<Utc>> {
    if n > 10_i64.pow(12) {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    s.parse::<i64>().ok().and_then(from_epoch)
}
