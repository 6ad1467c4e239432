//! # Project registry
//!
//! Lanes are keyed by `keccak256(xdr(legacy) ‖ xdr(replacement))`.
//!
//! `add_project` is an upsert: registering the same pair again overwrites the
//! lane and resets its counter. `update_project_details` addresses the lane by
//! the id it is given (never re-derived from the addresses) and rewrites only
//! the configuration entry, leaving redeemed volume intact.

use soroban_sdk::{panic_with_error, xdr::ToXdr, Address, BytesN, Env};

use crate::types::{is_null_address, Project, ProjectConfig, ProjectState};
use crate::{events, storage, Error};

/// Deterministic lane id for an ordered token pair.
pub fn derive_id(env: &Env, legacy: &Address, replacement: &Address) -> BytesN<32> {
    let mut payload = legacy.clone().to_xdr(env);
    payload.append(&replacement.clone().to_xdr(env));
    env.crypto().keccak256(&payload).into()
}

fn validate(env: &Env, legacy: &Address, replacement: &Address, total_swap_cap: i128) {
    if is_null_address(env, legacy) || is_null_address(env, replacement) {
        panic_with_error!(env, Error::InvalidAddresses);
    }
    if total_swap_cap <= 0 {
        panic_with_error!(env, Error::InvalidCap);
    }
}

pub fn add_project(
    env: &Env,
    legacy: Address,
    replacement: Address,
    total_swap_cap: i128,
) -> BytesN<32> {
    validate(env, &legacy, &replacement, total_swap_cap);

    let id = derive_id(env, &legacy, &replacement);
    storage::save_project_config(
        env,
        &ProjectConfig {
            id: id.clone(),
            legacy_implementation: legacy.clone(),
            replacement_implementation: replacement.clone(),
            total_swap_cap,
        },
    );
    storage::save_project_state(env, &id, &ProjectState { swapped_so_far: 0 });

    events::emit_project_added(env, id.clone(), legacy, replacement, total_swap_cap);
    id
}

pub fn update_project_details(
    env: &Env,
    id: BytesN<32>,
    legacy: Address,
    replacement: Address,
    total_swap_cap: i128,
) {
    validate(env, &legacy, &replacement, total_swap_cap);

    // A cap below redeemed volume would break `swapped_so_far <= total_swap_cap`.
    let state = storage::load_project_state(env, &id);
    if total_swap_cap < state.swapped_so_far {
        panic_with_error!(env, Error::InvalidCap);
    }

    storage::save_project_config(
        env,
        &ProjectConfig {
            id: id.clone(),
            legacy_implementation: legacy.clone(),
            replacement_implementation: replacement.clone(),
            total_swap_cap,
        },
    );

    events::emit_project_added(env, id, legacy, replacement, total_swap_cap);
}

pub fn get_project(env: &Env, id: &BytesN<32>) -> Project {
    storage::load_project(env, id)
}
