extern crate std;

use soroban_sdk::{testutils::Address as _, token, Address, BytesN, Env};

use crate::invariants::contract_error;
use crate::{null_address, ClaimerContract, ClaimerContractClient, Error};

fn setup() -> (Env, ClaimerContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ClaimerContract, ());
    let client = ClaimerContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let forwarder = Address::generate(&env);
    client.init(&admin, &forwarder);
    (env, client, admin, forwarder)
}

fn funded_lane<'a>(
    env: &Env,
    client: &ClaimerContractClient,
    admin: &Address,
    holder: &Address,
    amount: i128,
) -> (token::Client<'a>, token::Client<'a>, BytesN<32>) {
    let issuer = Address::generate(env);
    let legacy = env.register_stellar_asset_contract_v2(issuer.clone()).address();
    let replacement = env.register_stellar_asset_contract_v2(issuer).address();
    token::StellarAssetClient::new(env, &legacy).mint(holder, &amount);
    token::StellarAssetClient::new(env, &replacement).mint(&client.address, &amount);

    let id = client.add_project(admin, &None, &legacy, &replacement, &amount);
    let legacy = token::Client::new(env, &legacy);
    legacy.approve(holder, &client.address, &amount, &(env.ledger().sequence() + 100));
    (legacy, token::Client::new(env, &replacement), id)
}

#[test]
fn test_relayed_swap_credits_the_holder() {
    let (env, client, admin, forwarder) = setup();
    let alice = Address::generate(&env);
    let (legacy, replacement, id) = funded_lane(&env, &client, &admin, &alice, 1_000);

    client.swap(&forwarder, &Some(alice.clone()), &id, &1_000);

    // The relay signed, not the holder.
    let auths = env.auths();
    assert_eq!(replacement.balance(&alice), 1_000);
    assert_eq!(replacement.balance(&forwarder), 0);
    assert_eq!(legacy.balance(&alice), 0);
    assert_eq!(client.get_project(&id).swapped_so_far, 1_000);

    assert!(auths.iter().any(|(signer, _)| *signer == forwarder));
    assert!(!auths.iter().any(|(signer, _)| *signer == alice));
}

#[test]
fn test_suffix_from_untrusted_sender_is_ignored() {
    let (env, client, admin, _forwarder) = setup();
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);
    let (legacy, _replacement, id) = funded_lane(&env, &client, &admin, &alice, 1_000);

    // Resolves to mallory, who has no balance and no approval.
    let result = client.try_swap(&mallory, &Some(alice.clone()), &id, &1_000);
    assert!(result.is_err());
    assert_eq!(legacy.balance(&alice), 1_000);
    assert_eq!(client.get_project(&id).swapped_so_far, 0);

    let legacy_id = client.project_id(&legacy.address, &legacy.address);
    assert_eq!(
        client.try_add_project(&mallory, &Some(admin.clone()), &legacy.address, &legacy.address, &1),
        Err(Ok(contract_error(Error::NotOwner)))
    );
    assert_eq!(client.get_project(&legacy_id).total_swap_cap, 0);
}

#[test]
fn test_relayed_owner_operations() {
    let (env, client, admin, forwarder) = setup();
    let legacy = Address::generate(&env);
    let replacement = Address::generate(&env);

    let id = client.add_project(&forwarder, &Some(admin.clone()), &legacy, &replacement, &1_000);
    assert_eq!(client.get_project(&id).total_swap_cap, 1_000);

    client.pause(&forwarder, &Some(admin.clone()));
    assert!(client.is_paused());

    // Acting as itself, the forwarder holds no privileges.
    assert_eq!(client.try_unpause(&forwarder, &None), Err(Ok(contract_error(Error::NotOwner))));
}

#[test]
fn test_relayed_renounce_resolves_to_admin() {
    let (env, client, admin, forwarder) = setup();
    let alice = Address::generate(&env);
    client.transfer_ownership(&admin, &None, &alice);

    assert_eq!(
        client.try_renounce_ownership(&forwarder, &Some(alice.clone())),
        Err(Ok(contract_error(Error::NotAdmin)))
    );
    client.renounce_ownership(&forwarder, &Some(admin.clone()));
    assert_eq!(client.owner(), admin);
}

#[test]
fn test_null_forwarder_disables_relaying() {
    let (env, client, admin, forwarder) = setup();
    let alice = Address::generate(&env);
    let (_legacy, replacement, id) = funded_lane(&env, &client, &admin, &alice, 1_000);

    client.update_trust_forwarder(&admin, &None, &null_address(&env));
    assert!(!client.is_trusted_forwarder(&forwarder));

    // The former relay now acts as itself and has nothing to swap.
    let result = client.try_swap(&forwarder, &Some(alice.clone()), &id, &1_000);
    assert!(result.is_err());
    assert_eq!(replacement.balance(&alice), 0);
    assert_eq!(client.get_project(&id).swapped_so_far, 0);
}
