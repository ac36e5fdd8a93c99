use core::cmp;

use soroban_sdk::{
    Address, Env, String, Symbol, contract, contractimpl, contracttype, log, symbol_short,
    token::TokenClient,
};
use treasury_math::{DECIMALS, complement, pro_rata, proportion};

use crate::{
    Error,
    index_types::{BurnShares, Deposit, MintShares, Withdraw},
    share_token::IsShareToken,
    treasury::{DepositResult, IsTreasuryVault, WithdrawResult},
};

// Persistent storage keys
#[contracttype]
pub enum DataKey {
    /// Mapping of account addresses to their share balances
    Balance(Address),
}

// Instance storage
const STORAGE: Symbol = symbol_short!("STORAGE");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultStorage {
    /// Name of the share token
    name: String,
    /// Symbol of the share token
    symbol: String,
    /// Number of decimal places for share amounts
    decimals: u32,
    /// USD stablecoin contract (reserve A)
    reserve_a_asset: Address,
    /// EUR stablecoin contract (reserve B)
    reserve_b_asset: Address,
    /// USD held on behalf of share holders
    reserve_a: i128,
    /// EUR held on behalf of share holders
    reserve_b: i128,
    /// Shares in circulation; always the sum of all balances
    total_supply: i128,
}

impl VaultStorage {
    /// Get current state of the contract
    fn get_state(env: &Env) -> VaultStorage {
        env.storage()
            .instance()
            .get(&STORAGE)
            .expect("vault storage is set in the constructor")
    }

    fn set_state(env: &Env, storage: &VaultStorage) {
        env.storage().instance().set(&STORAGE, storage);
        let ttl = env.storage().max_ttl();
        env.storage().instance().extend_ttl(ttl, ttl);
    }
}

#[contract]
pub struct TreasuryVault;

#[contractimpl]
impl TreasuryVault {
    pub fn __constructor(
        env: &Env,
        reserve_a_asset: Address,
        reserve_b_asset: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if reserve_a_asset == reserve_b_asset {
            return Err(Error::IdenticalReserveAssets);
        }
        VaultStorage::set_state(
            env,
            &VaultStorage {
                name,
                symbol,
                decimals: DECIMALS,
                reserve_a_asset,
                reserve_b_asset,
                reserve_a: 0,
                reserve_b: 0,
                total_supply: 0,
            },
        );
        Ok(())
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
        let ttl = env.storage().max_ttl();
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Balance(id.clone()), ttl, ttl);
    }

    // Mint shares, internal only as every share must be backed by a deposit
    fn mint_internal(
        env: &Env,
        state: &mut VaultStorage,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let Some(new_balance) = Self::read_balance(env, to).checked_add(amount) else {
            return Err(Error::ArithmeticOverflow);
        };
        let Some(new_supply) = state.total_supply.checked_add(amount) else {
            return Err(Error::ArithmeticOverflow);
        };
        Self::write_balance(env, to, new_balance);
        state.total_supply = new_supply;
        MintShares {
            to: to.clone(),
            amount,
        }
        .publish(env);
        Ok(())
    }

    // Burn shares, internal only as burning must release the matching reserves
    fn burn_internal(
        env: &Env,
        state: &mut VaultStorage,
        from: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        let Some(new_balance) = Self::read_balance(env, from).checked_sub(amount) else {
            return Err(Error::ArithmeticOverflow);
        };
        let Some(new_supply) = state.total_supply.checked_sub(amount) else {
            return Err(Error::ArithmeticOverflow);
        };
        if new_balance < 0 || new_supply < 0 {
            return Err(Error::InsufficientBalance);
        }
        if new_balance == 0 {
            env.storage()
                .persistent()
                .remove(&DataKey::Balance(from.clone()));
        } else {
            Self::write_balance(env, from, new_balance);
        }
        state.total_supply = new_supply;
        BurnShares {
            from: from.clone(),
            amount,
        }
        .publish(env);
        Ok(())
    }

    /// What this contract may pull from `owner`: the smaller of allowance and balance
    fn pullable_amount(env: &Env, asset: &TokenClient, owner: &Address) -> i128 {
        let allowance = asset.allowance(owner, &env.current_contract_address());
        let balance = asset.balance(owner);
        cmp::max(cmp::min(allowance, balance), 0)
    }

    fn payouts(env: &Env, state: &VaultStorage, amount: i128) -> Result<(i128, i128), Error> {
        let payout_a = pro_rata(env, state.reserve_a, amount, state.total_supply)
            .ok_or(Error::ArithmeticOverflow)?;
        let payout_b = pro_rata(env, state.reserve_b, amount, state.total_supply)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok((payout_a, payout_b))
    }
}

#[contractimpl]
impl IsTreasuryVault for TreasuryVault {
    fn deposit_dual_all(env: &Env, depositor: Address) -> Result<DepositResult, Error> {
        depositor.require_auth();
        let vault = env.current_contract_address();
        let mut state = VaultStorage::get_state(env);
        let asset_a = TokenClient::new(env, &state.reserve_a_asset);
        let asset_b = TokenClient::new(env, &state.reserve_b_asset);

        let amount_a = Self::pullable_amount(env, &asset_a, &depositor);
        let amount_b = Self::pullable_amount(env, &asset_b, &depositor);
        let Some(shares) = amount_a.checked_add(amount_b) else {
            return Err(Error::ArithmeticOverflow);
        };
        if shares == 0 {
            return Err(Error::ZeroAmount);
        }

        // Calculate the new reserves and check for overflow before we transfer
        let Some(reserve_a) = state.reserve_a.checked_add(amount_a) else {
            return Err(Error::ArithmeticOverflow);
        };
        let Some(reserve_b) = state.reserve_b.checked_add(amount_b) else {
            return Err(Error::ArithmeticOverflow);
        };
        if state.total_supply.checked_add(shares).is_none() {
            return Err(Error::ArithmeticOverflow);
        }

        if amount_a > 0 {
            asset_a.transfer_from(&vault, &depositor, &vault, &amount_a);
        }
        if amount_b > 0 {
            asset_b.transfer_from(&vault, &depositor, &vault, &amount_b);
        }

        Self::mint_internal(env, &mut state, &depositor, shares)?;
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        VaultStorage::set_state(env, &state);

        Deposit {
            depositor,
            amount_a,
            amount_b,
            shares_minted: shares,
            reserve_a,
            reserve_b,
            total_supply: state.total_supply,
            ledger: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        }
        .publish(env);

        Ok(DepositResult {
            amount_a,
            amount_b,
            shares_minted: shares,
        })
    }

    fn withdraw_and_burn(
        env: &Env,
        withdrawer: Address,
        amount: i128,
    ) -> Result<WithdrawResult, Error> {
        withdrawer.require_auth();
        if amount <= 0 || Self::read_balance(env, &withdrawer) < amount {
            log!(env, "withdrawal exceeds share balance", withdrawer.clone(), amount);
            return Err(Error::InsufficientBalance);
        }

        let mut state = VaultStorage::get_state(env);
        let (payout_a, payout_b) = Self::payouts(env, &state, amount)?;
        let Some(reserve_a) = state.reserve_a.checked_sub(payout_a) else {
            return Err(Error::ArithmeticOverflow);
        };
        let Some(reserve_b) = state.reserve_b.checked_sub(payout_b) else {
            return Err(Error::ArithmeticOverflow);
        };

        Self::burn_internal(env, &mut state, &withdrawer, amount)?;
        state.reserve_a = reserve_a;
        state.reserve_b = reserve_b;
        VaultStorage::set_state(env, &state);

        let vault = env.current_contract_address();
        if payout_a > 0 {
            TokenClient::new(env, &state.reserve_a_asset).transfer(&vault, &withdrawer, &payout_a);
        }
        if payout_b > 0 {
            TokenClient::new(env, &state.reserve_b_asset).transfer(&vault, &withdrawer, &payout_b);
        }

        Withdraw {
            withdrawer,
            payout_a,
            payout_b,
            shares_burned: amount,
            reserve_a,
            reserve_b,
            total_supply: state.total_supply,
            ledger: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        }
        .publish(env);

        Ok(WithdrawResult {
            payout_a,
            payout_b,
            shares_burned: amount,
        })
    }

    fn preview_withdraw(env: &Env, amount: i128) -> Result<(i128, i128), Error> {
        let state = VaultStorage::get_state(env);
        if amount <= 0 || amount > state.total_supply {
            return Err(Error::InsufficientBalance);
        }
        Self::payouts(env, &state, amount)
    }

    fn usd_to_eur_proportion(env: &Env) -> Result<i128, Error> {
        let state = VaultStorage::get_state(env);
        let Some(total) = state.reserve_a.checked_add(state.reserve_b) else {
            return Err(Error::ArithmeticOverflow);
        };
        if total == 0 {
            return Err(Error::DivisionByEmptyVault);
        }
        proportion(env, state.reserve_a, total).ok_or(Error::ArithmeticOverflow)
    }

    fn eur_to_usd_proportion(env: &Env) -> Result<i128, Error> {
        let usd_to_eur = Self::usd_to_eur_proportion(env)?;
        complement(usd_to_eur).ok_or(Error::ArithmeticOverflow)
    }

    fn reserve_a(env: &Env) -> i128 {
        VaultStorage::get_state(env).reserve_a
    }

    fn reserve_b(env: &Env) -> i128 {
        VaultStorage::get_state(env).reserve_b
    }

    fn reserves(env: &Env) -> (i128, i128) {
        let state = VaultStorage::get_state(env);
        (state.reserve_a, state.reserve_b)
    }

    fn reserve_a_asset(env: &Env) -> Address {
        VaultStorage::get_state(env).reserve_a_asset
    }

    fn reserve_b_asset(env: &Env) -> Address {
        VaultStorage::get_state(env).reserve_b_asset
    }
}

#[contractimpl]
impl IsShareToken for TreasuryVault {
    fn balance(env: &Env, id: Address) -> i128 {
        Self::read_balance(env, &id)
    }

    fn total_supply(env: &Env) -> i128 {
        VaultStorage::get_state(env).total_supply
    }

    fn decimals(env: &Env) -> u32 {
        VaultStorage::get_state(env).decimals
    }

    fn name(env: &Env) -> String {
        VaultStorage::get_state(env).name
    }

    fn symbol(env: &Env) -> String {
        VaultStorage::get_state(env).symbol
    }
}
