#![allow(dead_code)]

extern crate std;

use soroban_sdk::Env;

use crate::types::{is_null_address, Project};
use crate::Error;

/// Host error a failed `try_*` call reports for a claimer error code.
pub fn contract_error(err: Error) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(err as u32)
}

/// Volume still redeemable before the cap is hit.
pub fn remaining(project: &Project) -> i128 {
    project.total_swap_cap - project.swapped_so_far
}

/// Redeemed volume is never negative.
pub fn assert_swapped_non_negative(project: &Project) {
    assert!(
        project.swapped_so_far >= 0,
        "lane invariant violated: lane has negative swapped_so_far ({})",
        project.swapped_so_far
    );
}

/// Redeemed volume never exceeds the cap.
pub fn assert_within_cap(project: &Project) {
    assert!(
        remaining(project) >= 0,
        "lane invariant violated: swapped_so_far ({}) exceeds total_swap_cap ({})",
        project.swapped_so_far,
        project.total_swap_cap
    );
}

/// A registered lane has a positive cap and two non-null tokens.
pub fn assert_registered_lane_valid(env: &Env, project: &Project) {
    assert!(
        project.total_swap_cap > 0,
        "lane invariant violated: registered lane has non-positive cap ({})",
        project.total_swap_cap
    );
    assert!(
        !is_null_address(env, &project.legacy_implementation),
        "lane invariant violated: registered lane has a null legacy token"
    );
    assert!(
        !is_null_address(env, &project.replacement_implementation),
        "lane invariant violated: registered lane has a null replacement token"
    );
}

/// The counter only grows, and only by what was swapped.
pub fn assert_swap_accounting(swapped_before: i128, swapped_after: i128, amount: i128) {
    assert_eq!(
        swapped_after,
        swapped_before + amount,
        "lane invariant violated: {} + {} != {}",
        swapped_before,
        amount,
        swapped_after
    );
}

/// A failed operation leaves the counter untouched.
pub fn assert_unchanged(before: &Project, after: &Project) {
    assert_eq!(
        before.swapped_so_far, after.swapped_so_far,
        "lane invariant violated: swapped_so_far changed on a rejected operation"
    );
}

/// Run all stateless lane invariants.
pub fn assert_all_project_invariants(env: &Env, project: &Project) {
    assert_swapped_non_negative(project);
    assert_within_cap(project);
    assert_registered_lane_valid(env, project);
}
