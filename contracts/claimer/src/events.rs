//! # Events
//!
//! | Topics                 | Data                    | Emitted by                                |
//! |------------------------|-------------------------|-------------------------------------------|
//! | `("proj_add", id)`     | [`ProjectAdded`]        | `add_project`, `update_project_details`   |
//! | `("swap", id)`         | [`SwapExecuted`]        | `swap`                                    |
//! | `("paused",)`          | `Address`               | `pause`                                   |
//! | `("unpaused",)`        | `Address`               | `unpause`                                 |
//! | `("own_xfer",)`        | [`OwnershipTransferred`]| `transfer_ownership`, `renounce_ownership`|
//!
//! The backend indexer keys on the leading topic symbol.

use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectAdded {
    pub project_id: BytesN<32>,
    pub legacy_token: Address,
    pub replacement_token: Address,
    pub total_swap_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapExecuted {
    pub project_id: BytesN<32>,
    pub who: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_project_added(
    env: &Env,
    project_id: BytesN<32>,
    legacy_token: Address,
    replacement_token: Address,
    total_swap_cap: i128,
) {
    let topics = (symbol_short!("proj_add"), project_id.clone());
    env.events().publish(
        topics,
        ProjectAdded {
            project_id,
            legacy_token,
            replacement_token,
            total_swap_cap,
        },
    );
}

pub fn emit_swap(env: &Env, project_id: BytesN<32>, who: Address, amount: i128) {
    let topics = (symbol_short!("swap"), project_id.clone());
    env.events().publish(
        topics,
        SwapExecuted {
            project_id,
            who,
            amount,
        },
    );
}

pub fn emit_paused(env: &Env, who: Address) {
    env.events().publish((symbol_short!("paused"),), who);
}

pub fn emit_unpaused(env: &Env, who: Address) {
    env.events().publish((symbol_short!("unpaused"),), who);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("own_xfer"),),
        OwnershipTransferred {
            previous_owner,
            new_owner,
        },
    );
}
