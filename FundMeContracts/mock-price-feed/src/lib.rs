#![no_std]
use soroban_sdk::{contract, contractimpl, symbol_short, Env, String};

mod types;

pub use types::*;

/// Settable price feed for local networks and tests.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Initialize the feed with its precision and a first answer (round 1).
    pub fn initialize(
        env: Env,
        decimals: u32,
        initial_answer: i128,
    ) -> Result<(), MockPriceFeedError> {
        if env.storage().instance().has(&DataKey::LatestRound) {
            return Err(MockPriceFeedError::AlreadyInitialized);
        }

        let round = PriceData {
            round_id: 1,
            price: initial_answer,
            decimals,
            updated_at: env.ledger().timestamp(),
        };
        env.storage().instance().set(&DataKey::LatestRound, &round);

        env.events()
            .publish((symbol_short!("init"),), (decimals, initial_answer));
        Ok(())
    }

    /// Publish a new answer stamped with the current ledger time.
    pub fn update_answer(env: Env, answer: i128) -> Result<(), MockPriceFeedError> {
        let latest = read_latest(&env)?;
        let round = PriceData {
            round_id: latest.round_id + 1,
            price: answer,
            decimals: latest.decimals,
            updated_at: env.ledger().timestamp(),
        };
        write_round(&env, &round);
        Ok(())
    }

    /// Overwrite every field of the latest round, including its timestamp.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        updated_at: u64,
    ) -> Result<(), MockPriceFeedError> {
        let latest = read_latest(&env)?;
        let round = PriceData {
            round_id,
            price: answer,
            decimals: latest.decimals,
            updated_at,
        };
        write_round(&env, &round);
        Ok(())
    }

    pub fn latest_round_data(env: Env) -> Result<PriceData, MockPriceFeedError> {
        read_latest(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, MockPriceFeedError> {
        Ok(read_latest(&env)?.decimals)
    }

    pub fn version() -> u32 {
        VERSION
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, "mock native/USD price feed")
    }
}

fn read_latest(env: &Env) -> Result<PriceData, MockPriceFeedError> {
    env.storage()
        .instance()
        .get(&DataKey::LatestRound)
        .ok_or(MockPriceFeedError::NotInitialized)
}

fn write_round(env: &Env, round: &PriceData) {
    env.storage().instance().set(&DataKey::LatestRound, round);
    env.events().publish(
        (symbol_short!("answer"), round.round_id),
        (round.price, round.updated_at),
    );
}
