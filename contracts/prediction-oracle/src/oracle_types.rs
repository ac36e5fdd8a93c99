use soroban_sdk::{Address, contracttype};

/// Observed values are percentages with three decimals: 1000 is 1.000%
pub const PERCENT_SCALE: i128 = 1_000;

/// A single entry of the feed
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Market probability, scaled by [`PERCENT_SCALE`]
    pub value: i128,
    /// When the value was observed at the source
    pub observed_timestamp: u64,
    /// When the observed market resolves; always after `observed_timestamp`
    pub resolution_timestamp: u64,
    /// Ledger timestamp at which the record was appended
    pub submitted_at: u64,
    /// Account that appended the record
    pub submitter: Address,
    /// Ledger sequence at which the record was appended
    pub ledger: u32,
}

/// Split a scaled value into whole percent and thousandths, e.g. 95_500 -> (95, 500).
/// Both parts carry the sign of a negative value.
pub fn split_percentage(value: i128) -> (i128, i128) {
    (value / PERCENT_SCALE, value % PERCENT_SCALE)
}
