use crate::events::{Funded, FUNDED, FUND_ME};
use crate::price_converter;
use crate::storage;
use crate::transfer::transfer_to_contract;
use crate::types::FundMeError;
use soroban_sdk::{log, token, Address, Env};

pub fn fund(env: &Env, funder: &Address, amount: i128) -> Result<(), FundMeError> {
    funder.require_auth();

    let price_feed = storage::read_price_feed(env)?;
    let native_token = storage::read_native_token(env)?;

    if amount <= 0 {
        return Err(FundMeError::InsufficientContribution);
    }

    // Both sides of the comparison use the native token's decimals
    let reading = price_converter::get_price(env, &price_feed)?;
    let usd_value = price_converter::to_usd(amount, &reading)?;
    let decimals = token::Client::new(env, &native_token).decimals();
    if usd_value < price_converter::minimum_usd_scaled(decimals)? {
        return Err(FundMeError::InsufficientContribution);
    }

    transfer_to_contract(env, &native_token, funder, amount)?;

    let total_funded = storage::read_amount_funded(env, funder)
        .checked_add(amount)
        .ok_or(FundMeError::ArithmeticOverflow)?;
    storage::write_amount_funded(env, funder, total_funded);

    // One entry per contribution, never deduplicated
    storage::push_funder(env, funder);

    log!(
        env,
        "fund_me Funded: funder={}, amount={}, usd_value={}, total_funded={}",
        funder.clone(),
        amount,
        usd_value,
        total_funded
    );

    env.events().publish(
        (FUND_ME, FUNDED),
        Funded {
            funder: funder.clone(),
            amount,
            total_funded,
        },
    );

    Ok(())
}
