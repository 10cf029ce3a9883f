#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::{Error, TokenContract, TokenContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup<'a>(env: &Env) -> (TokenContractClient<'a>, Address) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, TokenContract);
    let client = TokenContractClient::new(env, &contract_id);

    let admin = Address::generate(env);
    client.initialize(
        &admin,
        &String::from_str(env, "Hyde Park Alumni Token"),
        &String::from_str(env, "HPAT"),
        &1_000_000i128,
    );
    (client, admin)
}

#[test]
fn test_initialize_mints_full_supply_to_admin() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    assert_eq!(client.balance(&admin), 1_000_000);
    assert_eq!(client.total_supply(), 1_000_000);
    assert_eq!(client.name(), String::from_str(&env, "Hyde Park Alumni Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "HPAT"));
    assert_eq!(client.decimals(), 7);
}

#[test]
fn test_initialize_twice_rejected() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    let res = client.try_initialize(
        &admin,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
        &500i128,
    );
    assert_eq!(res, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(client.total_supply(), 1_000_000);
}

#[test]
fn test_initialize_rejects_non_positive_supply() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register_contract(None, TokenContract);
    let client = TokenContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let res = client.try_initialize(
        &admin,
        &String::from_str(&env, "Empty"),
        &String::from_str(&env, "EMP"),
        &0i128,
    );
    assert_eq!(res, Err(Ok(Error::InvalidAmount)));
}

#[test]
fn test_transfer_moves_balances() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let holder = Address::generate(&env);

    client.transfer(&admin, &holder, &250i128);

    assert_eq!(client.balance(&admin), 999_750);
    assert_eq!(client.balance(&holder), 250);
}

#[test]
fn test_transfer_conserves_total_supply() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    client.transfer(&admin, &a, &10_000i128);
    client.transfer(&a, &b, &4_000i128);
    client.transfer(&b, &admin, &1_500i128);

    let sum = client.balance(&admin) + client.balance(&a) + client.balance(&b);
    assert_eq!(sum, client.total_supply());
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let poor = Address::generate(&env);
    let other = Address::generate(&env);

    let res = client.try_transfer(&poor, &other, &1i128);
    assert_eq!(res, Err(Ok(Error::InsufficientBalance)));

    // nothing moved
    assert_eq!(client.balance(&poor), 0);
    assert_eq!(client.balance(&other), 0);
    assert_eq!(client.balance(&admin), 1_000_000);
}

#[test]
fn test_transfer_rejects_non_positive_amount() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let other = Address::generate(&env);

    assert_eq!(
        client.try_transfer(&admin, &other, &0i128),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        client.try_transfer(&admin, &other, &-5i128),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(client.balance(&admin), 1_000_000);
}
