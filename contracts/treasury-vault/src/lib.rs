#![no_std]

mod error;
mod index_types;
mod share_token;
mod treasury;
pub mod vault;

pub use error::Error;
pub use share_token::IsShareToken;
pub use treasury::{DepositResult, IsTreasuryVault, WithdrawResult};
pub use vault::{TreasuryVault, TreasuryVaultClient};
