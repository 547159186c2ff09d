use soroban_sdk::{contracterror, contracttype};

pub const VERSION: u32 = 0;

#[contracttype]
pub enum DataKey {
    LatestRound, // PriceData of the most recent round
}

/// One price reading. `price` is a fixed-point value with `decimals` digits
/// after the point.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub round_id: u64,
    pub price: i128,
    pub decimals: u32,
    pub updated_at: u64, // Ledger timestamp
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPriceFeedError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}
