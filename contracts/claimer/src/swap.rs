//! # Swap ledger
//!
//! Redeems legacy tokens for replacement tokens inside a lane's cap.
//!
//! Ordering is fixed: every precondition is checked and the new counter is
//! computed before either token is called, and the counter is committed only
//! after both transfers return. Token contracts may call back into the
//! claimer; nothing they observe mid-swap reflects the pending redemption.

use soroban_sdk::{panic_with_error, token, Address, BytesN, Env};

use crate::types::ProjectState;
use crate::{events, pause, storage, Error};

pub fn swap(env: &Env, who: &Address, project_id: &BytesN<32>, amount: i128) {
    pause::require_not_paused(env);
    if amount < 0 {
        panic_with_error!(env, Error::InvalidAmount);
    }

    // Check. An unregistered id yields a zero-cap lane over the null address.
    let project = storage::load_project(env, project_id);
    let new_swapped = match project.swapped_so_far.checked_add(amount) {
        Some(total) if total <= project.total_swap_cap => total,
        _ => panic_with_error!(env, Error::CapExceeded),
    };

    // Effect. Token failures abort the invocation unchanged.
    let custody = env.current_contract_address();
    token::Client::new(env, &project.legacy_implementation)
        .transfer_from(&custody, who, &custody, &amount);
    token::Client::new(env, &project.replacement_implementation)
        .transfer(&custody, who, &amount);

    // Commit.
    storage::save_project_state(
        env,
        project_id,
        &ProjectState {
            swapped_so_far: new_swapped,
        },
    );
    events::emit_swap(env, project_id.clone(), who.clone(), amount);
}
