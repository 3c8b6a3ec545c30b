//! Per-creator, per-token escrow balances.
//!
//! Balances are ledger entries backing prize pots, not custody of the asset
//! itself. They only move through the tournament lifecycle and the deposit
//! gateway, always inside a single invocation.

use soroban_sdk::{Address, Env};

use crate::creators;
use crate::error::Error;
use crate::types::{Asset, Creator, TokenId};

pub fn balance(record: &Creator, token: &TokenId) -> i128 {
    record.escrow_balances.get(token.clone()).unwrap_or(0)
}

/// Returns `record` with `asset` taken out of its escrow.
pub fn debited(mut record: Creator, asset: &Asset) -> Result<Creator, Error> {
    if asset.amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if asset.amount == 0 {
        return Ok(record);
    }

    let current = record
        .escrow_balances
        .get(asset.token.clone())
        .ok_or(Error::InsufficientFunds)?;
    if current < asset.amount {
        return Err(Error::InsufficientFunds);
    }

    record
        .escrow_balances
        .set(asset.token.clone(), current - asset.amount);
    Ok(record)
}

/// Returns `record` with `asset` added to its escrow. Overflow aborts the
/// whole invocation.
pub fn credited(env: &Env, mut record: Creator, asset: &Asset) -> Result<Creator, Error> {
    if asset.amount < 0 {
        return Err(Error::InvalidAmount);
    }
    if asset.amount == 0 {
        return Ok(record);
    }

    let current = balance(&record, &asset.token);
    let Some(updated) = current.checked_add(asset.amount) else {
        env.panic_with_error(Error::BalanceOverflow);
    };

    record.escrow_balances.set(asset.token.clone(), updated);
    Ok(record)
}

pub fn debit(env: &Env, creator: &Address, asset: &Asset) -> Result<(), Error> {
    if asset.amount == 0 {
        return Ok(());
    }
    let record = debited(creators::load(env, creator)?, asset)?;
    creators::store(env, creator, &record);
    Ok(())
}

pub fn credit(env: &Env, creator: &Address, asset: &Asset) -> Result<(), Error> {
    if asset.amount == 0 {
        return Ok(());
    }
    let record = credited(env, creators::load(env, creator)?, asset)?;
    creators::store(env, creator, &record);
    Ok(())
}
