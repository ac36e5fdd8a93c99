use soroban_sdk::{Address, contractevent};

#[contractevent(topics = ["deposit"])]
pub struct Deposit {
    #[topic]
    pub depositor: Address,
    pub amount_a: i128,
    pub amount_b: i128,
    pub shares_minted: i128,
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_supply: i128,
    pub ledger: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["withdraw"])]
pub struct Withdraw {
    #[topic]
    pub withdrawer: Address,
    pub payout_a: i128,
    pub payout_b: i128,
    pub shares_burned: i128,
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_supply: i128,
    pub ledger: u32,
    pub timestamp: u64,
}

#[contractevent(topics = ["mintshare"], data_format = "single-value")]
pub struct MintShares {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent(topics = ["burnshare"], data_format = "single-value")]
pub struct BurnShares {
    #[topic]
    pub from: Address,
    pub amount: i128,
}
