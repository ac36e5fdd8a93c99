use soroban_sdk::{Address, Env, contracttype};

use crate::Error;

/// Amounts pulled and shares issued by a deposit
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositResult {
    pub amount_a: i128,
    pub amount_b: i128,
    pub shares_minted: i128,
}

/// Amounts paid out and shares destroyed by a withdrawal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawResult {
    pub payout_a: i128,
    pub payout_b: i128,
    pub shares_burned: i128,
}

/// Dual-asset treasury holding a USD reserve (A) and an EUR reserve (B).
pub trait IsTreasuryVault {
    /// Pull everything `depositor` both holds and has approved to this contract, of
    /// both reserve assets, and mint one share per unit pulled.
    ///
    /// **Deposit Workflow:**
    /// 1. Call `approve` on each reserve asset with this contract as `spender`.
    /// 2. Call this function; the smaller of allowance and balance is pulled
    ///    for each asset.
    fn deposit_dual_all(env: &Env, depositor: Address) -> Result<DepositResult, Error>;

    /// Burn `amount` shares of `withdrawer` and pay out the same fraction of each
    /// reserve, rounded down. Remainders stay in the vault.
    fn withdraw_and_burn(env: &Env, withdrawer: Address, amount: i128)
    -> Result<WithdrawResult, Error>;

    /// Payout `withdraw_and_burn(amount)` would produce right now
    fn preview_withdraw(env: &Env, amount: i128) -> Result<(i128, i128), Error>;

    /// Share of the USD reserve in the total, scaled by 10^18
    fn usd_to_eur_proportion(env: &Env) -> Result<i128, Error>;

    /// Share of the EUR reserve in the total, scaled by 10^18.
    /// Always `10^18 - usd_to_eur_proportion`.
    fn eur_to_usd_proportion(env: &Env) -> Result<i128, Error>;

    /// Amount of the USD asset held
    fn reserve_a(env: &Env) -> i128;

    /// Amount of the EUR asset held
    fn reserve_b(env: &Env) -> i128;

    /// Both reserves as `(usd, eur)`
    fn reserves(env: &Env) -> (i128, i128);

    /// USD asset contract
    fn reserve_a_asset(env: &Env) -> Address;

    /// EUR asset contract
    fn reserve_b_asset(env: &Env) -> Address;
}
