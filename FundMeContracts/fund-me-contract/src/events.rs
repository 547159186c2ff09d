use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing FundMe events.
pub const FUND_ME: Symbol = symbol_short!("FUND_ME");

pub const INIT: Symbol = symbol_short!("INIT");

pub const FUNDED: Symbol = symbol_short!("FUNDED");

pub const WITHDRAWN: Symbol = symbol_short!("WITHDRAWN");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    pub owner: Address,
    pub price_feed: Address,
    pub native_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    pub funder: Address,
    pub amount: i128,
    pub total_funded: i128, // Funder's running total
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub owner: Address,
    pub amount: i128,
    pub funders_cleared: u32,
}
