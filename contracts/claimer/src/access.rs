//! # Access control
//!
//! Two privilege levels:
//!
//! | Role    | Set by                         | Powers                                   |
//! |---------|--------------------------------|------------------------------------------|
//! | `admin` | `init`, never reassignable     | `renounce_ownership` only                |
//! | `owner` | `init`, `transfer_ownership`   | every other privileged entry point       |
//!
//! Renouncing is admin-gated, not owner-gated: it hands ownership back to the
//! admin, so an owner that was transferred away can always be recovered.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{events, storage, Error};

/// Set both roles to `admin`. Fails with `AlreadyInitialized` on a second call.
pub fn init(env: &Env, admin: &Address) {
    if storage::is_initialized(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    storage::set_owner(env, admin);
}

/// Panics with `NotOwner` unless `who` is the current owner.
pub fn require_owner(env: &Env, who: &Address) {
    if storage::get_owner(env) != *who {
        panic_with_error!(env, Error::NotOwner);
    }
}

/// Panics with `NotAdmin` unless `who` is the permanent admin.
pub fn require_admin(env: &Env, who: &Address) {
    if storage::get_admin(env) != *who {
        panic_with_error!(env, Error::NotAdmin);
    }
}

pub fn transfer_ownership(env: &Env, who: &Address, new_owner: &Address) {
    require_owner(env, who);
    let previous = storage::get_owner(env);
    storage::set_owner(env, new_owner);
    events::emit_ownership_transferred(env, previous, new_owner.clone());
}

pub fn renounce_ownership(env: &Env, who: &Address) {
    require_admin(env, who);
    let previous = storage::get_owner(env);
    let admin = storage::get_admin(env);
    storage::set_owner(env, &admin);
    events::emit_ownership_transferred(env, previous, admin);
}
