use crate::errors::Error;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-boxed capped token sale with owner-gated settlement"
);

#[contract]
pub struct CrowdsaleContract;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

/// Shared purchase path for the explicit and the payment-derived entry
/// points. Checks run in a fixed order and the first failure aborts the
/// call with no state change; `tokens_sold` is written before any
/// cross-contract transfer so a re-entering call never sees stale state.
fn execute_purchase(
    env: &Env,
    config: &SaleConfig,
    buyer: &Address,
    amount: i128,
    payment: i128,
) -> Result<(), Error> {
    let now = get_ledger_timestamp(env);
    if now < config.opening_time || now >= config.closing_time || is_finalized(env) {
        return Err(Error::SaleNotOpen);
    }
    if amount < config.min_contribution || amount > config.max_contribution {
        return Err(Error::ContributionOutOfBounds);
    }
    let sold = get_tokens_sold(env);
    let new_sold = sold.checked_add(amount).ok_or(Error::CapExceeded)?;
    if new_sold > config.max_tokens {
        return Err(Error::CapExceeded);
    }
    let due = amount
        .checked_mul(config.price)
        .ok_or(Error::IncorrectPayment)?;
    if payment != due {
        return Err(Error::IncorrectPayment);
    }

    // effects
    set_tokens_sold(env, new_sold);

    // interactions: collect the payment, then release escrowed tokens
    let this = env.current_contract_address();
    token::Client::new(env, &config.payment_token).transfer(buyer, &this, &payment);
    token::Client::new(env, &config.token).transfer(&this, buyer, &amount);

    env.events()
        .publish((symbol_short!("buy"),), (amount, buyer.clone()));
    Ok(())
}

#[contractimpl]
impl CrowdsaleContract {
    /// Set up the sale. All parameters are fixed afterwards except
    /// `price`, which the owner can change while the sale runs.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_token: Address,
        price: i128,
        max_tokens: i128,
        minimum_goal: i128,
        min_contribution: i128,
        max_contribution: i128,
        opening_time: u64,
        closing_time: u64,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }
        if max_tokens <= 0
            || minimum_goal < 0
            || min_contribution < 0
            || max_contribution < min_contribution
            || opening_time >= closing_time
        {
            return Err(Error::InvalidParams);
        }

        let config = SaleConfig {
            token: token.clone(),
            payment_token: payment_token.clone(),
            price,
            max_tokens,
            minimum_goal,
            min_contribution,
            max_contribution,
            opening_time,
            closing_time,
        };
        set_config(&env, &config);
        set_owner(&env, &owner);
        set_tokens_sold(&env, 0);
        set_finalized(&env, false);

        env.events().publish(
            (symbol_short!("init"),),
            (token, payment_token, price, max_tokens),
        );
        Ok(())
    }

    /// Buy an explicit token amount against an exact payment.
    pub fn buy_tokens(
        env: Env,
        buyer: Address,
        amount: i128,
        payment: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        execute_purchase(&env, &config, &buyer, amount, payment)
    }

    /// Bare-payment path: the token amount is derived from the payment at
    /// the current price. The payment must divide evenly.
    pub fn receive_payment(env: Env, buyer: Address, payment: i128) -> Result<(), Error> {
        buyer.require_auth();
        let config = get_config(&env)?;
        if payment <= 0 || payment % config.price != 0 {
            return Err(Error::IncorrectPayment);
        }
        let amount = payment / config.price;
        execute_purchase(&env, &config, &buyer, amount, payment)
    }

    /// Owner-only price update, effective for subsequent purchases.
    pub fn set_price(env: Env, caller: Address, new_price: i128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if new_price <= 0 {
            return Err(Error::InvalidPrice);
        }
        let mut config = get_config(&env)?;
        config.price = new_price;
        set_config(&env, &config);

        env.events().publish((symbol_short!("price"),), new_price);
        Ok(())
    }

    /// Terminal transition: once the window has closed, sweep the unsold
    /// escrow and all collected payment to the owner. Runs exactly once.
    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let config = get_config(&env)?;
        if get_ledger_timestamp(&env) < config.closing_time {
            return Err(Error::SaleNotClosed);
        }
        if is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }

        // terminal flag lands before the sweeps
        set_finalized(&env, true);

        let this = env.current_contract_address();
        let owner = get_owner(&env)?;

        let token_client = token::Client::new(&env, &config.token);
        let remaining = token_client.balance(&this);
        if remaining > 0 {
            token_client.transfer(&this, &owner, &remaining);
        }

        let payment_client = token::Client::new(&env, &config.payment_token);
        let proceeds = payment_client.balance(&this);
        if proceeds > 0 {
            payment_client.transfer(&this, &owner, &proceeds);
        }

        env.events()
            .publish((symbol_short!("finalize"),), (remaining, proceeds));
        Ok(())
    }

    // View functions
    pub fn price(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.price)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn tokens_sold(env: Env) -> i128 {
        get_tokens_sold(&env)
    }

    pub fn opening_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.opening_time)
    }

    pub fn closing_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.closing_time)
    }

    pub fn minimum_goal(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.minimum_goal)
    }

    pub fn is_finalized(env: Env) -> bool {
        is_finalized(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }
}
