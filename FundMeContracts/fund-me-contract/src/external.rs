use soroban_sdk::{contractclient, contracttype};

/// Latest reading returned by a price feed. `price` is the USD value of one
/// native unit, with `decimals` fractional digits.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub round_id: u64,
    pub price: i128,
    pub decimals: u32,
    pub updated_at: u64,
}

/// Interface for native/USD price feed contracts.
#[allow(dead_code)]
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    /// Returns the most recent round with its price and precision.
    fn latest_round_data() -> PriceData;

    fn version() -> u32;
}
