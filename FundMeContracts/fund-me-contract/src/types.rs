use soroban_sdk::{contracterror, contracttype, Address};

/// Minimum contribution, in whole USD.
pub const MINIMUM_USD: i128 = 50;

/// Oldest price reading accepted, in seconds.
pub const MAX_PRICE_AGE: u64 = 3_600;

#[contracttype]
pub enum DataKey {
    Owner,                 // Address allowed to withdraw
    PriceFeed,             // Native/USD price feed contract
    NativeToken,           // Asset contract of the native unit
    Funder(u32),           // Funder list slot, one per contribution
    FundersCount,          // Number of occupied funder slots
    AmountFunded(Address), // Funder -> cumulative contribution
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InsufficientContribution = 3,
    NotOwner = 4,
    TransferFailed = 5,
    IndexOutOfRange = 6,
    OracleUnavailable = 7,
    InvalidPrice = 8,
    StalePrice = 9,
    ArithmeticOverflow = 10,
}
