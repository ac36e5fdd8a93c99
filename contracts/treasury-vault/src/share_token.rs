use soroban_sdk::{Address, Env, String};

/// Read-only view of the pool share ledger.
///
/// Shares are account-bound: balances and supply only change through
/// `deposit_dual_all` (mint) and `withdraw_and_burn` (burn).
pub trait IsShareToken {
    /// Return the share balance of `id`
    fn balance(env: &Env, id: Address) -> i128;

    /// Return the number of shares in circulation
    fn total_supply(env: &Env) -> i128;

    /// Return the number of decimals used to represent share amounts
    fn decimals(env: &Env) -> u32;

    /// Return the name of the share token
    fn name(env: &Env) -> String;

    /// Return the symbol of the share token
    fn symbol(env: &Env) -> String;
}
