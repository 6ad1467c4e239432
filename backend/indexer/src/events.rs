//! Canonical event types emitted by the claimer contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/claimer/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the claimer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A lane was registered or its details rewritten (`proj_add` topic).
    ProjectAdded,
    /// A holder redeemed legacy tokens (`swap` topic).
    Swap,
    /// Swaps were halted (`paused` topic).
    Paused,
    /// Swaps were resumed (`unpaused` topic).
    Unpaused,
    /// Ownership was transferred or renounced back to the admin (`own_xfer` topic).
    OwnershipTransferred,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "proj_add" => Self::ProjectAdded,
            "swap" => Self::Swap,
            "paused" => Self::Paused,
            "unpaused" => Self::Unpaused,
            "own_xfer" => Self::OwnershipTransferred,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectAdded => "project_added",
            Self::Swap => "swap",
            Self::Paused => "paused",
            Self::Unpaused => "unpaused",
            Self::OwnershipTransferred => "ownership_transferred",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the second topic carries a lane id.
    pub fn has_project_topic(&self) -> bool {
        matches!(self, Self::ProjectAdded | Self::Swap)
    }
}

/// A fully decoded claimer event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimerEvent {
    /// Unique RPC event id; the idempotency key.
    pub event_key: String,
    pub event_type: String,
    /// Lane id as lowercase hex.
    pub project_id: Option<String>,
    /// Holder for swaps, new owner for ownership changes, caller for pause toggles.
    pub actor: Option<String>,
    /// Swap amount or lane cap, as a decimal i128 string.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// An event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_key: String,
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// Redemption volume of one lane, aggregated from indexed `swap` events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapSummary {
    pub project_id: String,
    pub swap_count: usize,
    /// Decimal string: i128 does not fit a JSON number.
    pub total_swapped: String,
}
