//! # Types
//!
//! Shared data structures used across all modules of the claimer.
//!
//! ## Config / State split
//!
//! A migration lane ([`Project`]) is stored as two ledger entries:
//!
//! - [`ProjectConfig`] — the token pair and the cap. Rewritten by
//!   `add_project` and `update_project_details`.
//! - [`ProjectState`] — the running redemption total. Written only by
//!   `add_project` (reset) and `swap` (increase).
//!
//! Updates therefore cannot touch historical redemption volume.
//!
//! ## Null address
//!
//! Soroban has no zero address, so the all-zero Stellar account is used as
//! the "unset" sentinel. Nobody holds its key, so it can never authorize.

use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Strkey of the all-zero ed25519 account.
pub const NULL_ADDRESS_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Build the null-address sentinel.
pub fn null_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, NULL_ADDRESS_STRKEY))
}

/// Returns `true` if `address` is the null-address sentinel.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}

/// Token pair and cap of a lane.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: BytesN<32>,
    pub legacy_implementation: Address,
    pub replacement_implementation: Address,
    pub total_swap_cap: i128,
}

/// Mutable redemption counter of a lane.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub swapped_so_far: i128,
}

/// Full on-chain representation of a migration lane.
///
/// Used as the public API return type; reconstructed internally from
/// the split `ProjectConfig` + `ProjectState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// `keccak256(xdr(legacy) ‖ xdr(replacement))`.
    pub id: BytesN<32>,
    /// Token holders redeem from.
    pub legacy_implementation: Address,
    /// Token paid out from the claimer's custody.
    pub replacement_implementation: Address,
    /// Upper bound on cumulative redemption, in the token's smallest unit.
    pub total_swap_cap: i128,
    /// Volume redeemed through this lane so far.
    pub swapped_so_far: i128,
}

impl Project {
    /// The zero-valued lane returned for ids that were never registered.
    pub fn empty(env: &Env, id: BytesN<32>) -> Self {
        Project {
            id,
            legacy_implementation: null_address(env),
            replacement_implementation: null_address(env),
            total_swap_cap: 0,
            swapped_so_far: 0,
        }
    }
}
