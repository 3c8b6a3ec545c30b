//! Intake of funds into creator escrow.
//!
//! A credited deposit is never held by this contract: the asset is relayed to
//! the configured custodian within the same invocation, and the escrow entry
//! is only bookkeeping against that custody.

use soroban_sdk::{log, token, Address, Env, String};

use crate::config;
use crate::creators;
use crate::error::Error;
use crate::escrow;
use crate::events;
use crate::types::{Asset, Configuration, Creator, InboundTransfer, TokenId, TokenRole};

pub const ADD_FUNDS_MEMO: &str = "add-funds";
pub const ADD_TOKENS_MEMO: &str = "add-tokens";

/// What an inbound transfer asks for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DepositMemo {
    AddFunds,
    /// Reserved; accepted and ignored.
    AddTokens,
    Unknown,
}

impl DepositMemo {
    pub fn parse(env: &Env, memo: &String) -> Self {
        if *memo == String::from_str(env, ADD_FUNDS_MEMO) {
            DepositMemo::AddFunds
        } else if *memo == String::from_str(env, ADD_TOKENS_MEMO) {
            DepositMemo::AddTokens
        } else {
            DepositMemo::Unknown
        }
    }
}

/// Handles an inbound transfer. Returns whether escrow was credited; transfers
/// not addressed to this contract or without the `add-funds` memo are
/// ignored.
pub fn on_inbound_transfer(env: &Env, transfer: InboundTransfer) -> Result<bool, Error> {
    if transfer.to != env.current_contract_address() {
        return Ok(false);
    }
    match DepositMemo::parse(env, &transfer.memo) {
        DepositMemo::AddFunds => {}
        DepositMemo::AddTokens | DepositMemo::Unknown => {
            log!(env, "ignoring inbound transfer", transfer.from, transfer.memo);
            return Ok(false);
        }
    }

    let asset = Asset {
        token: transfer.token,
        amount: transfer.amount,
    };
    credit_and_relay(env, &transfer.from, &transfer.from, asset)?;
    Ok(true)
}

/// Credits `creator`'s escrow with `asset`, then moves the asset from `payer`
/// through this contract to the custodian.
pub fn credit_and_relay(
    env: &Env,
    payer: &Address,
    creator: &Address,
    asset: Asset,
) -> Result<(), Error> {
    let config = config::load(env)?;
    let record = creators::load(env, creator)?;

    if asset.amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if !is_depositable(&config, &record, &asset.token) {
        return Err(Error::UnsupportedToken);
    }

    let record = escrow::credited(env, record, &asset)?;
    creators::store(env, creator, &record);

    relay(env, payer, &config.custodian, &asset);

    events::deposit_credited(env, creator, &asset);
    Ok(())
}

fn is_depositable(config: &Configuration, record: &Creator, token: &TokenId) -> bool {
    creators::supports(config, Some(record), token, TokenRole::Fee)
        || creators::supports(config, Some(record), token, TokenRole::Stake)
}

/// A failed token transfer traps, which discards the escrow credit along with
/// everything else done in this invocation.
fn relay(env: &Env, payer: &Address, custodian: &Address, asset: &Asset) {
    let client = token::Client::new(env, &asset.token.contract);
    let this = env.current_contract_address();
    client.transfer(payer, &this, &asset.amount);
    client.transfer(&this, custodian, &asset.amount);
}
