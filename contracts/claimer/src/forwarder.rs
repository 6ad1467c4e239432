//! # Relayed-call identity
//!
//! A trusted forwarder may submit invocations on behalf of a holder. The
//! relay appends the holder's address to the call (`relayed_for`); that
//! suffix is honoured only when the authenticated sender is the registered
//! forwarder. Every other caller is taken at face value.
//!
//! Setting the forwarder to the null address disables relaying: nobody can
//! authenticate as it, so `resolve_caller` never matches.

use soroban_sdk::{Address, Env};

use crate::storage;

/// Version of the relay context-resolution protocol this contract honours.
pub const RECIPIENT_VERSION: u32 = 2;

/// Resolve the effective caller of an invocation.
///
/// Pure: depends only on its arguments, so relays and tests can reason about
/// it without a deployed contract.
pub fn resolve_caller(
    raw_caller: &Address,
    appended: &Option<Address>,
    trusted_forwarder: &Address,
) -> Address {
    match appended {
        Some(original) if raw_caller == trusted_forwarder => original.clone(),
        _ => raw_caller.clone(),
    }
}

/// Authenticate `sender` and return the identity used for every downstream check.
pub fn effective_caller(env: &Env, sender: &Address, relayed_for: &Option<Address>) -> Address {
    sender.require_auth();
    let trusted = storage::get_trusted_forwarder(env);
    resolve_caller(sender, relayed_for, &trusted)
}

pub fn is_trusted_forwarder(env: &Env, candidate: &Address) -> bool {
    storage::get_trusted_forwarder(env) == *candidate
}

/// Replace the forwarder unconditionally. Authorization is the caller's job.
pub fn set_trusted_forwarder(env: &Env, new_forwarder: &Address) {
    storage::set_trusted_forwarder(env, new_forwarder);
}
