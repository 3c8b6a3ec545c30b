use soroban_sdk::{Address, Env, Map, String, Vec};

use crate::config;
use crate::error::Error;
use crate::types::{Capabilities, Configuration, Creator, DataKey, TokenId, TokenRole};

const CREATOR_THRESHOLD: u32 = 100_000;
const CREATOR_BUMP: u32 = 500_000;

pub fn load(env: &Env, creator: &Address) -> Result<Creator, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Creator(creator.clone()))
        .ok_or(Error::CreatorNotFound)
}

pub fn find(env: &Env, creator: &Address) -> Option<Creator> {
    env.storage()
        .persistent()
        .get(&DataKey::Creator(creator.clone()))
}

pub fn store(env: &Env, creator: &Address, record: &Creator) {
    let key = DataKey::Creator(creator.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, CREATOR_THRESHOLD, CREATOR_BUMP);
}

pub fn register(
    env: &Env,
    creator: &Address,
    metadata: String,
    capabilities: Capabilities,
    fee_token_overrides: Vec<TokenId>,
    stake_token_overrides: Vec<TokenId>,
) -> Result<Creator, Error> {
    if env
        .storage()
        .persistent()
        .has(&DataKey::Creator(creator.clone()))
    {
        return Err(Error::CreatorExists);
    }

    let record = Creator {
        metadata,
        capabilities,
        fee_token_overrides,
        stake_token_overrides,
        escrow_balances: Map::new(env),
    };
    store(env, creator, &record);
    Ok(record)
}

/// Deletes the record, escrow balances included. Callers are responsible
/// for making sure nothing is left in escrow and no tournament is pending.
pub fn unregister(env: &Env, creator: &Address) -> Result<(), Error> {
    let key = DataKey::Creator(creator.clone());
    if !env.storage().persistent().has(&key) {
        return Err(Error::CreatorNotFound);
    }
    env.storage().persistent().remove(&key);
    Ok(())
}

pub fn overrides(record: &Creator, role: TokenRole) -> &Vec<TokenId> {
    match role {
        TokenRole::Fee => &record.fee_token_overrides,
        TokenRole::Stake => &record.stake_token_overrides,
    }
}

/// True when `token` is whitelisted for `role` globally or through the
/// creator's own overrides.
pub fn supports(
    config: &Configuration,
    record: Option<&Creator>,
    token: &TokenId,
    role: TokenRole,
) -> bool {
    if config::whitelist(config, role).contains(token) {
        return true;
    }
    record.map_or(false, |r| overrides(r, role).contains(token))
}

pub fn is_token_supported(
    env: &Env,
    creator: &Address,
    token: &TokenId,
    role: TokenRole,
) -> Result<bool, Error> {
    let config = config::load(env)?;
    let record = find(env, creator);
    Ok(supports(&config, record.as_ref(), token, role))
}
