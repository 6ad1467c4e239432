//! # Token Migration Claimer
//!
//! A Soroban contract that lets an operator register migration lanes, each a
//! (legacy token, replacement token) pair with a cap on cumulative volume,
//! and lets holders redeem legacy balances one-for-one for the replacement
//! token until the cap is reached.
//!
//! | Phase        | Entry Point(s)                                                   |
//! |--------------|------------------------------------------------------------------|
//! | Bootstrap    | [`ClaimerContract::init`]                                        |
//! | Ownership    | `transfer_ownership`, `renounce_ownership`                       |
//! | Registry     | `add_project`, `update_project_details`                          |
//! | Redemption   | [`ClaimerContract::swap`]                                        |
//! | Circuit      | `pause`, `unpause`                                               |
//! | Relaying     | `update_trust_forwarder`                                         |
//! | Queries      | `get_project`, `project_id`, `admin`, `owner`, `is_paused`, `trusted_forwarder`, `is_trusted_forwarder`, `recipient_version` |
//!
//! ## Caller resolution
//!
//! Entry points that act for a caller take `sender` (who signs) and
//! `relayed_for` (the address a relay appended). The effective caller is
//! resolved by [`forwarder::resolve_caller`] before any authorization check.
//!
//! ## Architecture
//!
//! Authorization lives in [`access`], the swap gate in [`pause`], lane
//! bookkeeping in [`registry`] and redemption in `swap`. This file only
//! wires entry points to them.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, BytesN, Env};

pub mod access;
pub mod events;
pub mod forwarder;
pub mod pause;
pub mod registry;
mod storage;
mod swap;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_relay;

pub use forwarder::RECIPIENT_VERSION;
pub use types::{null_address, Project, NULL_ADDRESS_STRKEY};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotOwner               = 1,
    NotAdmin               = 2,
    InvalidAddresses       = 3,
    InvalidCap             = 4,
    SystemPaused           = 5,
    CapExceeded            = 6,
    InvalidPauseTransition = 7,
    AlreadyInitialized     = 8,
    NotInitialized         = 9,
    InvalidAmount          = 10,
}

#[contract]
pub struct ClaimerContract;

#[contractimpl]
impl ClaimerContract {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract.
    ///
    /// `admin` becomes both the permanent admin and the first owner and must
    /// sign. `trusted_forwarder` may be the null address to disable relaying.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, trusted_forwarder: Address) {
        admin.require_auth();
        access::init(&env, &admin);
        forwarder::set_trusted_forwarder(&env, &trusted_forwarder);
    }

    // ─────────────────────────────────────────────────────────
    // Ownership
    // ─────────────────────────────────────────────────────────

    /// Hand ownership to `new_owner`. Owner only.
    pub fn transfer_ownership(
        env: Env,
        sender: Address,
        relayed_for: Option<Address>,
        new_owner: Address,
    ) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::transfer_ownership(&env, &who, &new_owner);
    }

    /// Reset ownership to the admin. Admin only, even when someone else owns.
    pub fn renounce_ownership(env: Env, sender: Address, relayed_for: Option<Address>) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::renounce_ownership(&env, &who);
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────

    /// Register (or overwrite) the lane for `legacy_token → replacement_token`.
    ///
    /// Returns the lane id. The redemption counter starts at zero.
    pub fn add_project(
        env: Env,
        sender: Address,
        relayed_for: Option<Address>,
        legacy_token: Address,
        replacement_token: Address,
        total_swap_cap: i128,
    ) -> BytesN<32> {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::require_owner(&env, &who);
        registry::add_project(&env, legacy_token, replacement_token, total_swap_cap)
    }

    /// Rewrite the token pair and cap stored at `id`.
    ///
    /// `id` is used as given; it is not re-derived from the token addresses.
    /// Redeemed volume is preserved.
    pub fn update_project_details(
        env: Env,
        sender: Address,
        relayed_for: Option<Address>,
        id: BytesN<32>,
        legacy_token: Address,
        replacement_token: Address,
        total_swap_cap: i128,
    ) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::require_owner(&env, &who);
        registry::update_project_details(&env, id, legacy_token, replacement_token, total_swap_cap);
    }

    /// Retrieve a lane; unregistered ids return a zero-valued project.
    pub fn get_project(env: Env, id: BytesN<32>) -> Project {
        registry::get_project(&env, &id)
    }

    /// Lane id for an ordered token pair.
    pub fn project_id(env: Env, legacy_token: Address, replacement_token: Address) -> BytesN<32> {
        registry::derive_id(&env, &legacy_token, &replacement_token)
    }

    // ─────────────────────────────────────────────────────────
    // Redemption
    // ─────────────────────────────────────────────────────────

    /// Redeem `amount` legacy tokens for the same amount of replacement tokens.
    ///
    /// The effective caller must have approved the claimer for `amount` of the
    /// legacy token, and the claimer must hold `amount` of the replacement.
    pub fn swap(
        env: Env,
        sender: Address,
        relayed_for: Option<Address>,
        project_id: BytesN<32>,
        amount: i128,
    ) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        swap::swap(&env, &who, &project_id, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Circuit breaker
    // ─────────────────────────────────────────────────────────

    pub fn pause(env: Env, sender: Address, relayed_for: Option<Address>) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::require_owner(&env, &who);
        pause::pause(&env, &who);
    }

    pub fn unpause(env: Env, sender: Address, relayed_for: Option<Address>) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::require_owner(&env, &who);
        pause::unpause(&env, &who);
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Relaying
    // ─────────────────────────────────────────────────────────

    /// Replace the trusted forwarder. Owner only; no validation, no event.
    pub fn update_trust_forwarder(
        env: Env,
        sender: Address,
        relayed_for: Option<Address>,
        new_forwarder: Address,
    ) {
        let who = forwarder::effective_caller(&env, &sender, &relayed_for);
        access::require_owner(&env, &who);
        forwarder::set_trusted_forwarder(&env, &new_forwarder);
    }

    pub fn trusted_forwarder(env: Env) -> Address {
        storage::get_trusted_forwarder(&env)
    }

    pub fn is_trusted_forwarder(env: Env, candidate: Address) -> bool {
        forwarder::is_trusted_forwarder(&env, &candidate)
    }

    /// Relay protocol version; always 2.
    pub fn recipient_version(_env: Env) -> u32 {
        RECIPIENT_VERSION
    }
}
