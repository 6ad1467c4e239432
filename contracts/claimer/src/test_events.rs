extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, Symbol, TryFromVal, TryIntoVal, Val,
};

use crate::events::{OwnershipTransferred, ProjectAdded, SwapExecuted};
use crate::invariants::contract_error;
use crate::{ClaimerContract, ClaimerContractClient, Error};

fn setup_with_init() -> (Env, ClaimerContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ClaimerContract, ());
    let client = ClaimerContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.init(&admin, &Address::generate(&env));
    (env, client, admin)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn count_topic(env: &Env, topic: Symbol) -> usize {
    env.events()
        .all()
        .iter()
        .filter(|(_, topics, _)| {
            topics
                .get(0)
                .and_then(|t: Val| Symbol::try_from_val(env, &t).ok())
                .map(|s| s == topic)
                .unwrap_or(false)
        })
        .count()
}

#[test]
fn test_project_added_event() {
    let (env, client, admin) = setup_with_init();
    let legacy = Address::generate(&env);
    let replacement = Address::generate(&env);

    let id = client.add_project(&admin, &None, &legacy, &replacement, &50_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("proj_add"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("proj_add").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ProjectAdded {
            project_id: id,
            legacy_token: legacy,
            replacement_token: replacement,
            total_swap_cap: 50_000,
        }
    );
}

#[test]
fn test_update_reuses_project_added_event() {
    let (env, client, admin) = setup_with_init();
    let legacy = Address::generate(&env);
    let replacement = Address::generate(&env);
    let id = client.add_project(&admin, &None, &legacy, &replacement, &50_000);

    client.update_project_details(&admin, &None, &id, &legacy, &replacement, &60_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("proj_add").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: ProjectAdded = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data.total_swap_cap, 60_000);
}

#[test]
fn test_swap_event() {
    let (env, client, admin) = setup_with_init();
    let alice = Address::generate(&env);
    let issuer = Address::generate(&env);
    let legacy = create_token(&env, &issuer);
    let replacement = create_token(&env, &issuer);
    token::StellarAssetClient::new(&env, &legacy.address).mint(&alice, &5_000);
    token::StellarAssetClient::new(&env, &replacement.address).mint(&client.address, &5_000);

    let id = client.add_project(&admin, &None, &legacy.address, &replacement.address, &5_000);
    legacy.approve(&alice, &client.address, &5_000, &(env.ledger().sequence() + 100));
    client.swap(&alice, &None, &id, &5_000);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("swap"), project_id)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("swap").into_val(&env),
        id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: SwapExecuted = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        SwapExecuted {
            project_id: id,
            who: alice,
            amount: 5_000,
        }
    );
}

#[test]
fn test_no_swap_event_while_paused() {
    let (env, client, admin) = setup_with_init();
    let alice = Address::generate(&env);
    let issuer = Address::generate(&env);
    let legacy = create_token(&env, &issuer);
    let replacement = create_token(&env, &issuer);
    token::StellarAssetClient::new(&env, &legacy.address).mint(&alice, &5_000);
    token::StellarAssetClient::new(&env, &replacement.address).mint(&client.address, &5_000);
    let id = client.add_project(&admin, &None, &legacy.address, &replacement.address, &5_000);
    legacy.approve(&alice, &client.address, &5_000, &(env.ledger().sequence() + 100));

    client.pause(&admin, &None);
    let result = client.try_swap(&alice, &None, &id, &5_000);

    assert_eq!(result, Err(Ok(contract_error(Error::SystemPaused))));
    assert_eq!(count_topic(&env, symbol_short!("swap")), 0);
}

#[test]
fn test_pause_and_unpause_events() {
    let (env, client, admin) = setup_with_init();

    client.pause(&admin, &None);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("paused").into_val(&env)]
    );
    let who: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(who, admin);

    client.unpause(&admin, &None);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("unpaused").into_val(&env)]
    );
    let who: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(who, admin);
}

#[test]
fn test_ownership_events() {
    let (env, client, admin) = setup_with_init();
    let alice = Address::generate(&env);

    client.transfer_ownership(&admin, &None, &alice);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    assert_eq!(
        last_event.1,
        vec![&env, symbol_short!("own_xfer").into_val(&env)]
    );
    let event_data: OwnershipTransferred = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        OwnershipTransferred {
            previous_owner: admin.clone(),
            new_owner: alice.clone(),
        }
    );

    client.renounce_ownership(&admin, &None);
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let event_data: OwnershipTransferred = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        OwnershipTransferred {
            previous_owner: alice,
            new_owner: admin,
        }
    );
}

#[test]
fn test_update_trust_forwarder_emits_nothing() {
    let (env, client, admin) = setup_with_init();
    let relay = Address::generate(&env);

    client.update_trust_forwarder(&admin, &None, &relay);

    assert_eq!(count_topic(&env, symbol_short!("proj_add")), 0);
    assert_eq!(count_topic(&env, symbol_short!("own_xfer")), 0);
    assert_eq!(count_topic(&env, symbol_short!("paused")), 0);
}
