#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod events;
mod external;
mod funding;
mod price_converter;
mod storage;
mod transfer;
mod types;
mod withdrawal;

pub use events::*;
pub use external::*;
pub use types::*;

/// Crowdfunding ledger: anyone may fund with at least `MINIMUM_USD` worth of
/// the native unit, only the owner may withdraw.
#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `owner` - The only address allowed to withdraw; must authorize
    /// * `price_feed` - Native/USD price feed contract
    /// * `native_token` - Asset contract of the native unit
    pub fn initialize(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
    ) -> Result<(), FundMeError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(FundMeError::AlreadyInitialized);
        }
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::PriceFeed, &price_feed);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
        env.storage()
            .persistent()
            .set(&DataKey::FundersCount, &0u32);

        env.events().publish(
            (FUND_ME, INIT),
            Initialized {
                owner,
                price_feed,
                native_token,
            },
        );

        Ok(())
    }

    // Funding functions
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        funding::fund(&env, &funder, amount)
    }

    // Withdrawal functions, both return the amount sent to the owner
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        withdrawal::withdraw(&env, &caller)
    }

    pub fn withdraw_cheap(env: Env, caller: Address) -> Result<i128, FundMeError> {
        withdrawal::withdraw_cheap(&env, &caller)
    }

    // Accessors
    pub fn get_owner(env: Env) -> Result<Address, FundMeError> {
        storage::read_owner(&env)
    }

    pub fn get_price_feed(env: Env) -> Result<Address, FundMeError> {
        storage::read_price_feed(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, FundMeError> {
        storage::read_native_token(&env)
    }

    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        storage::funder_at(&env, index).ok_or(FundMeError::IndexOutOfRange)
    }

    pub fn get_funders_count(env: Env) -> u32 {
        storage::funders_len(&env)
    }

    pub fn get_address_to_amount_funded(env: Env, funder: Address) -> i128 {
        storage::read_amount_funded(&env, &funder)
    }

    /// Minimum contribution in whole USD.
    pub fn get_minimum_usd() -> i128 {
        MINIMUM_USD
    }

    /// USD value of `amount` native units, in the native decimal scale.
    pub fn get_conversion_rate(env: Env, amount: i128) -> Result<i128, FundMeError> {
        let price_feed = storage::read_price_feed(&env)?;
        price_converter::get_conversion_rate(&env, amount, &price_feed)
    }

    /// Version reported by the price feed.
    pub fn get_version(env: Env) -> Result<u32, FundMeError> {
        let price_feed = storage::read_price_feed(&env)?;
        match PriceFeedClient::new(&env, &price_feed).try_version() {
            Ok(Ok(version)) => Ok(version),
            _ => Err(FundMeError::OracleUnavailable),
        }
    }
}
