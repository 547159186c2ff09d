use crate::events::{Withdrawn, FUND_ME, WITHDRAWN};
use crate::storage;
use crate::transfer::transfer_from_contract;
use crate::types::FundMeError;
use soroban_sdk::{log, token, Address, Env, Vec};

/// Withdraw the whole balance to the owner, walking the funder list straight
/// from storage: the length and each element are read again on every step.
pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, FundMeError> {
    let owner = require_owner(env, caller)?;

    let mut staged: Vec<Address> = Vec::new(env);
    let mut index = 0;
    while index < storage::funders_len(env) {
        let funder = storage::funder_at(env, index).ok_or(FundMeError::IndexOutOfRange)?;
        staged.push_back(funder);
        index += 1;
    }

    settle(env, &owner, &staged)
}

/// Same outcome as [`withdraw`], but the funder list is loaded once into a
/// working copy and never re-read.
pub fn withdraw_cheap(env: &Env, caller: &Address) -> Result<i128, FundMeError> {
    let owner = require_owner(env, caller)?;

    let funders = storage::read_funders(env);

    settle(env, &owner, &funders)
}

fn require_owner(env: &Env, caller: &Address) -> Result<Address, FundMeError> {
    let owner = storage::read_owner(env)?;
    if *caller != owner {
        return Err(FundMeError::NotOwner);
    }
    caller.require_auth();
    Ok(owner)
}

// Nothing is written until the transfer to the owner has gone through.
fn settle(env: &Env, owner: &Address, staged: &Vec<Address>) -> Result<i128, FundMeError> {
    let native_token = storage::read_native_token(env)?;
    let balance = token::Client::new(env, &native_token).balance(&env.current_contract_address());

    if balance > 0 {
        transfer_from_contract(env, &native_token, owner, balance)?;
    }

    // Repeated funders are cleared more than once, which is harmless
    for funder in staged.iter() {
        storage::remove_amount_funded(env, &funder);
    }
    storage::clear_funders(env, staged.len());

    log!(
        env,
        "fund_me Withdrawn: owner={}, amount={}, funders_cleared={}",
        owner.clone(),
        balance,
        staged.len()
    );

    env.events().publish(
        (FUND_ME, WITHDRAWN),
        Withdrawn {
            owner: owner.clone(),
            amount: balance,
            funders_cleared: staged.len(),
        },
    );

    Ok(balance)
}
