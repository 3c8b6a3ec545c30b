//! Configuration singleton and platform authority.
//!
//! The singleton lives in instance storage and moves between two states:
//! absent (never initialized, or torn down) and present. Every reader goes
//! through [`load`], which reports absence as [`Error::NotConfigured`].

use soroban_sdk::{Address, Env, Vec};

use crate::error::Error;
use crate::types::{Configuration, DataKey, TokenId, TokenRole};

const INSTANCE_THRESHOLD: u32 = 518_400; // ~30 days @ 5s/ledger
const INSTANCE_BUMP: u32 = 1_036_800; // ~60 days @ 5s/ledger

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_BUMP);
}

// ───────────── PLATFORM AUTHORITY ─────────────

/// Records `caller` as the platform authority on first use. Afterwards only
/// that same address passes.
pub fn claim_platform(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let storage = env.storage().instance();
    match storage.get::<_, Address>(&DataKey::Platform) {
        Some(platform) if platform != *caller => Err(Error::Unauthorized),
        Some(_) => Ok(()),
        None => {
            storage.set(&DataKey::Platform, caller);
            Ok(())
        }
    }
}

pub fn require_platform(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();

    let platform: Address = env
        .storage()
        .instance()
        .get(&DataKey::Platform)
        .ok_or(Error::NotConfigured)?;
    if platform != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

// ───────────── SINGLETON ─────────────

pub fn load(env: &Env) -> Result<Configuration, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotConfigured)
}

pub fn store(env: &Env, config: &Configuration) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance_ttl(env);
}

pub fn initialize(env: &Env, custodian: Address) -> Result<Configuration, Error> {
    if env.storage().instance().has(&DataKey::Config) {
        return Err(Error::AlreadyInitialized);
    }

    // A re-created configuration continues numbering after the last issued id.
    let last_id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::LastTournamentId)
        .unwrap_or(0);

    let config = Configuration {
        tournament_counter: last_id + 1,
        fee_tokens: Vec::new(env),
        stake_tokens: Vec::new(env),
        custodian,
    };
    store(env, &config);
    Ok(config)
}

pub fn teardown(env: &Env) -> Result<(), Error> {
    let storage = env.storage().instance();
    if !storage.has(&DataKey::Config) {
        return Err(Error::NotConfigured);
    }
    storage.remove(&DataKey::Config);
    Ok(())
}

// ───────────── WHITELISTS ─────────────

pub fn whitelist(config: &Configuration, role: TokenRole) -> &Vec<TokenId> {
    match role {
        TokenRole::Fee => &config.fee_tokens,
        TokenRole::Stake => &config.stake_tokens,
    }
}

/// Returns `config` with `token` appended to the `role` whitelist.
pub fn with_token(
    mut config: Configuration,
    token: TokenId,
    role: TokenRole,
) -> Result<Configuration, Error> {
    let list = match role {
        TokenRole::Fee => &mut config.fee_tokens,
        TokenRole::Stake => &mut config.stake_tokens,
    };
    if list.contains(&token) {
        return Err(Error::DuplicateToken);
    }
    list.push_back(token);
    Ok(config)
}

// ───────────── ID ALLOCATION ─────────────

/// Hands out the next tournament id. Ids are never reused, even after the
/// tournament holding one is cancelled.
pub fn next_tournament_id(env: &Env) -> Result<u64, Error> {
    let mut config = load(env)?;
    let id = config.tournament_counter;
    config.tournament_counter = id + 1;
    store(env, &config);
    env.storage().instance().set(&DataKey::LastTournamentId, &id);
    Ok(id)
}
