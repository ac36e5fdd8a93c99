use soroban_sdk::{Address, contractevent};

#[contractevent(topics = ["observation"])]
pub struct ObservationSubmitted {
    #[topic]
    pub index: u32,
    pub value: i128,
    pub observed_timestamp: u64,
    pub resolution_timestamp: u64,
    pub submitted_at: u64,
    pub submitter: Address,
    pub ledger: u32,
}
