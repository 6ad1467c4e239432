//! # Pause gate
//!
//! `Active ⇄ Paused`, starting `Active`. Only `swap` consults the gate;
//! registry and ownership operations keep working while paused.

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{events, storage, Error};

/// Panics with `SystemPaused` while the gate is closed.
pub fn require_not_paused(env: &Env) {
    if storage::is_paused(env) {
        panic_with_error!(env, Error::SystemPaused);
    }
}

pub fn pause(env: &Env, who: &Address) {
    if storage::is_paused(env) {
        panic_with_error!(env, Error::InvalidPauseTransition);
    }
    storage::set_paused(env, true);
    events::emit_paused(env, who.clone());
}

pub fn unpause(env: &Env, who: &Address) {
    if !storage::is_paused(env) {
        panic_with_error!(env, Error::InvalidPauseTransition);
    }
    storage::set_paused(env, false);
    events::emit_unpaused(env, who.clone());
}
