use crate::external::{PriceData, PriceFeedClient};
use crate::types::{FundMeError, MAX_PRICE_AGE, MINIMUM_USD};
use soroban_sdk::{Address, Env};

/// Read the latest price from the feed. Any failed, non-positive or stale
/// reading is an error.
pub fn get_price(env: &Env, price_feed: &Address) -> Result<PriceData, FundMeError> {
    let reading = match PriceFeedClient::new(env, price_feed).try_latest_round_data() {
        Ok(Ok(reading)) => reading,
        _ => return Err(FundMeError::OracleUnavailable),
    };

    if reading.price <= 0 {
        return Err(FundMeError::InvalidPrice);
    }

    let age = env.ledger().timestamp().saturating_sub(reading.updated_at);
    if age > MAX_PRICE_AGE {
        return Err(FundMeError::StalePrice);
    }

    Ok(reading)
}

/// USD value of `amount`, kept in the amount's own decimal scale.
pub fn get_conversion_rate(
    env: &Env,
    amount: i128,
    price_feed: &Address,
) -> Result<i128, FundMeError> {
    let reading = get_price(env, price_feed)?;
    to_usd(amount, &reading)
}

pub fn to_usd(amount: i128, reading: &PriceData) -> Result<i128, FundMeError> {
    let scale = pow10(reading.decimals)?;
    amount
        .checked_mul(reading.price)
        .map(|value| value / scale)
        .ok_or(FundMeError::ArithmeticOverflow)
}

/// `MINIMUM_USD` expressed with `decimals` fractional digits.
pub fn minimum_usd_scaled(decimals: u32) -> Result<i128, FundMeError> {
    MINIMUM_USD
        .checked_mul(pow10(decimals)?)
        .ok_or(FundMeError::ArithmeticOverflow)
}

fn pow10(decimals: u32) -> Result<i128, FundMeError> {
    10i128
        .checked_pow(decimals)
        .ok_or(FundMeError::ArithmeticOverflow)
}
