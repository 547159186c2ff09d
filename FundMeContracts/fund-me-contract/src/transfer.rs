use crate::types::FundMeError;
use soroban_sdk::{token, Address, Env};

// Pull native value from a funder into the contract
pub fn transfer_to_contract(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), FundMeError> {
    try_transfer(env, token, from, &env.current_contract_address(), amount)
}

// Send native value held by the contract
pub fn transfer_from_contract(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), FundMeError> {
    try_transfer(env, token, &env.current_contract_address(), to, amount)
}

fn try_transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), FundMeError> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FundMeError::TransferFailed),
    }
}
