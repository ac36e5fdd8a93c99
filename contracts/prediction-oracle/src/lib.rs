#![no_std]

pub mod oracle_types;
pub mod prediction_oracle;
mod error;
mod feed;
mod index_types;

pub use error::Error;
pub use feed::{IsObservationFeed, IsObservationFeedAdmin};
pub use oracle_types::*;
pub use prediction_oracle::{PredictionOracle, PredictionOracleClient};
