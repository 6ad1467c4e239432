//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the claimer:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key                | Type      | Description                          |
//! |--------------------|-----------|--------------------------------------|
//! | `Admin`            | `Address` | Permanent root identity              |
//! | `Owner`            | `Address` | Current operator                     |
//! | `Paused`           | `bool`    | Swap gate                            |
//! | `TrustedForwarder` | `Address` | Relay whose appended caller is trusted |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type            | Description                 |
//! |--------------------|-----------------|-----------------------------|
//! | `ProjConfig(id)`   | `ProjectConfig` | Token pair and cap          |
//! | `ProjState(id)`    | `ProjectState`  | Redeemed volume             |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};

use crate::types::{Project, ProjectConfig, ProjectState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Permanent admin (Instance).
    Admin,
    /// Current owner (Instance).
    Owner,
    /// Pause flag (Instance).
    Paused,
    /// Trusted relay address (Instance).
    TrustedForwarder,
    /// Lane configuration keyed by id (Persistent).
    ProjConfig(BytesN<32>),
    /// Lane redemption counter keyed by id (Persistent).
    ProjState(BytesN<32>),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `init`.
pub fn get_admin(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `init`.
pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    bump_instance(env);
}

/// Defaults to `false` when unset.
pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_trusted_forwarder(env: &Env, forwarder: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::TrustedForwarder, forwarder);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `init`.
pub fn get_trusted_forwarder(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::TrustedForwarder)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Write the lane configuration only. The redemption counter is untouched.
pub fn save_project_config(env: &Env, config: &ProjectConfig) {
    let key = DataKey::ProjConfig(config.id.clone());
    env.storage().persistent().set(&key, config);
    bump_persistent(env, &key);
}

/// Load the lane configuration, if the lane exists.
pub fn load_project_config(env: &Env, id: &BytesN<32>) -> Option<ProjectConfig> {
    let key = DataKey::ProjConfig(id.clone());
    let config: Option<ProjectConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load the redemption counter; a lane with no entry has redeemed nothing.
pub fn load_project_state(env: &Env, id: &BytesN<32>) -> ProjectState {
    let key = DataKey::ProjState(id.clone());
    match env.storage().persistent().get::<_, ProjectState>(&key) {
        Some(state) => {
            bump_persistent(env, &key);
            state
        }
        None => ProjectState { swapped_so_far: 0 },
    }
}

pub fn save_project_state(env: &Env, id: &BytesN<32>, state: &ProjectState) {
    let key = DataKey::ProjState(id.clone());
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Load the full `Project` by combining config and state.
/// Returns the zero-valued lane when `id` was never registered.
pub fn load_project(env: &Env, id: &BytesN<32>) -> Project {
    match load_project_config(env, id) {
        Some(config) => {
            let state = load_project_state(env, id);
            Project {
                id: config.id,
                legacy_implementation: config.legacy_implementation,
                replacement_implementation: config.replacement_implementation,
                total_swap_cap: config.total_swap_cap,
                swapped_so_far: state.swapped_so_far,
            }
        }
        None => Project::empty(env, id.clone()),
    }
}
