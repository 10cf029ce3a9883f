use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,         // ledger whose escrowed balance is sold
    pub payment_token: Address, // asset buyers pay with
    pub price: i128,            // payment units per token unit, > 0
    pub max_tokens: i128,
    pub minimum_goal: i128, // stored for reporting; no policy attached
    pub min_contribution: i128,
    pub max_contribution: i128,
    pub opening_time: u64,
    pub closing_time: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    TokensSold,
    Finalized,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
