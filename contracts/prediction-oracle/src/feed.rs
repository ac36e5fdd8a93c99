use crate::{Error, Observation};
use soroban_sdk::{Address, Env, String, Vec};

/// Read interface of the observation feed
pub trait IsObservationFeed {
    /// Return the account allowed to submit observations
    fn get_owner(env: &Env) -> Address;

    /// Return the human readable feed name
    fn name(env: &Env) -> String;

    /// Return the number of observations appended so far
    fn get_total_records(env: &Env) -> u32;

    /// Get the most recent observation, or `None` if nothing was submitted yet
    fn get_latest(env: &Env) -> Option<Observation>;

    /// Get the observation at `index` (0 is the oldest)
    fn get_record(env: &Env, index: u32) -> Result<Observation, Error>;

    /// Get up to `count` observations, most recent first
    fn get_records(env: &Env, count: u32) -> Vec<Observation>;
}

/// Owner interface of the observation feed
pub trait IsObservationFeedAdmin {
    /// Append a new observation. Can be invoked only by the owner account.
    /// Returns the index of the new record.
    fn submit(
        env: &Env,
        submitter: Address,
        value: i128,
        observed_timestamp: u64,
        resolution_timestamp: u64,
    ) -> Result<u32, Error>;
}
