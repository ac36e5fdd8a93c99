use soroban_sdk::{
    Address, Env, String, Symbol, Vec, contract, contractimpl, contracttype, log,
    symbol_short,
};

use crate::error::Error;
use crate::feed::{IsObservationFeed, IsObservationFeedAdmin};
use crate::index_types::ObservationSubmitted;
use crate::oracle_types::Observation;

const OWNER_KEY: Symbol = symbol_short!("OWNER");
const STORAGE: Symbol = symbol_short!("STORAGE");

#[contracttype]
#[derive(Clone, Debug)]
pub struct OracleStorage {
    /// Feed name, e.g. "EUR/USD daily range"
    name: String,
    /// Number of records appended; also the index of the next one
    total_records: u32,
    /// `submitted_at` of the newest record, 0 while empty
    last_submitted_at: u64,
}

impl OracleStorage {
    pub fn get_state(env: &Env) -> OracleStorage {
        env.storage()
            .instance()
            .get(&STORAGE)
            .expect("oracle storage is set in the constructor")
    }

    pub fn set_state(env: &Env, storage: &OracleStorage) {
        env.storage().instance().set(&STORAGE, storage);
        let ttl = env.storage().max_ttl();
        env.storage().instance().extend_ttl(ttl, ttl);
    }
}

#[contracttype]
enum DataKey {
    Record(u32),
}

#[contract]
pub struct PredictionOracle;

#[contractimpl]
impl PredictionOracle {
    pub fn __constructor(env: &Env, owner: Address, name: String) {
        env.storage().instance().set(&OWNER_KEY, &owner);
        OracleStorage::set_state(
            env,
            &OracleStorage {
                name,
                total_records: 0,
                last_submitted_at: 0,
            },
        );
    }

    fn owner(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&OWNER_KEY)
            .expect("owner is set in the constructor")
    }

    /// Authenticate `caller` and check it is the feed owner
    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != Self::owner(env) {
            log!(env, "rejected submission from non-owner", caller.clone());
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn set_record(env: &Env, index: u32, observation: &Observation) {
        env.storage()
            .persistent()
            .set(&DataKey::Record(index), observation);
        let ttl = env.storage().max_ttl();
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Record(index), ttl, ttl);
    }

    fn read_record(env: &Env, index: u32) -> Option<Observation> {
        env.storage().persistent().get(&DataKey::Record(index))
    }
}

#[contractimpl]
impl IsObservationFeedAdmin for PredictionOracle {
    fn submit(
        env: &Env,
        submitter: Address,
        value: i128,
        observed_timestamp: u64,
        resolution_timestamp: u64,
    ) -> Result<u32, Error> {
        Self::require_owner(env, &submitter)?;

        if resolution_timestamp <= observed_timestamp {
            return Err(Error::InvalidTimestampOrdering);
        }

        let mut state = OracleStorage::get_state(env);
        let submitted_at = env.ledger().timestamp();
        if submitted_at < state.last_submitted_at {
            log!(
                env,
                "submission time regressed",
                submitted_at,
                state.last_submitted_at
            );
            return Err(Error::InvalidTimestampOrdering);
        }

        let index = state.total_records;
        let Some(total_records) = index.checked_add(1) else {
            return Err(Error::ArithmeticOverflow);
        };

        let observation = Observation {
            value,
            observed_timestamp,
            resolution_timestamp,
            submitted_at,
            submitter: submitter.clone(),
            ledger: env.ledger().sequence(),
        };
        Self::set_record(env, index, &observation);

        state.total_records = total_records;
        state.last_submitted_at = submitted_at;
        OracleStorage::set_state(env, &state);

        ObservationSubmitted {
            index,
            value,
            observed_timestamp,
            resolution_timestamp,
            submitted_at,
            submitter,
            ledger: observation.ledger,
        }
        .publish(env);

        Ok(index)
    }
}

#[contractimpl]
impl IsObservationFeed for PredictionOracle {
    fn get_owner(env: &Env) -> Address {
        Self::owner(env)
    }

    fn name(env: &Env) -> String {
        OracleStorage::get_state(env).name
    }

    fn get_total_records(env: &Env) -> u32 {
        OracleStorage::get_state(env).total_records
    }

    fn get_latest(env: &Env) -> Option<Observation> {
        let total = OracleStorage::get_state(env).total_records;
        if total == 0 {
            return None;
        }
        Self::read_record(env, total - 1)
    }

    fn get_record(env: &Env, index: u32) -> Result<Observation, Error> {
        Self::read_record(env, index).ok_or(Error::RecordNotFound)
    }

    fn get_records(env: &Env, count: u32) -> Vec<Observation> {
        let total = OracleStorage::get_state(env).total_records;
        let mut records = Vec::new(env);
        (0..total)
            .rev()
            .take(count as usize)
            .filter_map(|index| Self::read_record(env, index))
            .for_each(|observation| records.push_back(observation));
        records
    }
}
