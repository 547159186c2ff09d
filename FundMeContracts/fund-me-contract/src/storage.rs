use crate::types::{DataKey, FundMeError};
use soroban_sdk::{Address, Env, Vec};

pub fn read_owner(env: &Env) -> Result<Address, FundMeError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(FundMeError::NotInitialized)
}

pub fn read_price_feed(env: &Env) -> Result<Address, FundMeError> {
    env.storage()
        .instance()
        .get(&DataKey::PriceFeed)
        .ok_or(FundMeError::NotInitialized)
}

pub fn read_native_token(env: &Env) -> Result<Address, FundMeError> {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(FundMeError::NotInitialized)
}

// The funder list lives in one slot per entry, so reading or appending a
// single funder never touches the rest of the list.

pub fn funders_len(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::FundersCount)
        .unwrap_or(0)
}

pub fn funder_at(env: &Env, index: u32) -> Option<Address> {
    if index >= funders_len(env) {
        return None;
    }
    env.storage().persistent().get(&DataKey::Funder(index))
}

pub fn push_funder(env: &Env, funder: &Address) {
    let count = funders_len(env);
    env.storage()
        .persistent()
        .set(&DataKey::Funder(count), funder);
    env.storage()
        .persistent()
        .set(&DataKey::FundersCount, &(count + 1));
}

/// Load the whole list into memory with one pass over its slots.
pub fn read_funders(env: &Env) -> Vec<Address> {
    let count = funders_len(env);
    let mut funders = Vec::new(env);
    for index in 0..count {
        if let Some(funder) = env.storage().persistent().get(&DataKey::Funder(index)) {
            funders.push_back(funder);
        }
    }
    funders
}

pub fn clear_funders(env: &Env, count: u32) {
    for index in 0..count {
        env.storage().persistent().remove(&DataKey::Funder(index));
    }
    env.storage().persistent().set(&DataKey::FundersCount, &0u32);
}

pub fn read_amount_funded(env: &Env, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::AmountFunded(funder.clone()))
        .unwrap_or(0)
}

pub fn write_amount_funded(env: &Env, funder: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::AmountFunded(funder.clone()), &amount);
}

pub fn remove_amount_funded(env: &Env, funder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::AmountFunded(funder.clone()));
}
