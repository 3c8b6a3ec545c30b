//! Tournament table and lifecycle.
//!
//! A tournament is either absent or active. Creating one reserves its prize
//! pot from the creator's escrow, editing swaps the old reservation for the
//! new one, and cancelling releases it. A platform-forced cancellation drops
//! the row without releasing the pot.

use soroban_sdk::{log, Address, Env};

use crate::config;
use crate::creators;
use crate::error::Error;
use crate::escrow;
use crate::events;
use crate::schedule;
use crate::types::{DataKey, TokenRole, Tournament, TournamentParams};

pub const MIN_DURATION_HOURS: u64 = 1;
pub const MAX_DURATION_HOURS: u64 = 168; // 7 days
const SECONDS_PER_HOUR: u64 = 3_600;

const TOURNAMENT_THRESHOLD: u32 = 100_000;
const TOURNAMENT_BUMP: u32 = 500_000;

/// Candy Fiesta, Templok, Ringy Dingy, Endless Siege 2, Rug Pool, Pac-Man.
pub const SUPPORTED_GAMES: [u64; 6] = [1, 2, 3, 4, 5, 6];

pub fn is_supported_game(game: u64) -> bool {
    SUPPORTED_GAMES.contains(&game)
}

// ───────────── STORAGE ─────────────

pub fn load(env: &Env, id: u64) -> Result<Tournament, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Tournament(id))
        .ok_or(Error::TournamentNotFound)
}

fn store(env: &Env, tournament: &Tournament) {
    let key = DataKey::Tournament(tournament.id);
    env.storage().persistent().set(&key, tournament);
    env.storage()
        .persistent()
        .extend_ttl(&key, TOURNAMENT_THRESHOLD, TOURNAMENT_BUMP);
}

fn delete(env: &Env, tournament: &Tournament) {
    env.storage()
        .persistent()
        .remove(&DataKey::Tournament(tournament.id));
    schedule::index_remove(env, &tournament.creator, tournament.id);
}

// ───────────── VALIDATION ─────────────

/// Checks `params` against the configuration, the creator's record and the
/// creator's other tournaments. `ignore` excludes the tournament being edited
/// from the scheduling check.
fn validate(
    env: &Env,
    creator: &Address,
    params: &TournamentParams,
    ignore: Option<u64>,
) -> Result<(), Error> {
    let config = config::load(env)?;
    let record = creators::load(env, creator)?;

    if params.fee.amount < 0 || params.stake.amount < 0 || params.prize_pot.amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let now = env.ledger().timestamp();
    if params.start_time < now || params.start_time >= params.end_time {
        return Err(Error::InvalidTimestamps);
    }

    let duration = params.end_time - params.start_time;
    if duration < MIN_DURATION_HOURS * SECONDS_PER_HOUR
        || duration > MAX_DURATION_HOURS * SECONDS_PER_HOUR
    {
        return Err(Error::InvalidDuration);
    }

    if !is_supported_game(params.game) {
        return Err(Error::UnsupportedGame);
    }

    if !creators::supports(&config, Some(&record), &params.fee.token, TokenRole::Fee)
        || !creators::supports(&config, Some(&record), &params.stake.token, TokenRole::Stake)
    {
        return Err(Error::UnsupportedToken);
    }

    schedule::ensure_no_conflict(
        env,
        creator,
        params.game,
        params.start_time,
        params.end_time,
        ignore,
    )?;

    if params.fee.amount != 0 && params.fee.token != params.prize_pot.token {
        return Err(Error::PotTokenMismatch);
    }

    let caps = record.capabilities;
    if params.stake.amount > 0 && !caps.stake_available {
        return Err(Error::StakeNotAllowed);
    }
    if params.prize_pot.amount > 0 && !caps.pot_available {
        return Err(Error::PotNotAllowed);
    }
    let wants_nft = params.nft.as_ref().map_or(false, |nft| nft.len() > 0);
    if wants_nft && !caps.nft_available {
        return Err(Error::NftNotAllowed);
    }

    Ok(())
}

fn require_owner(tournament: &Tournament, creator: &Address) -> Result<(), Error> {
    if tournament.creator != *creator {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn require_not_started(env: &Env, tournament: &Tournament) -> Result<(), Error> {
    if env.ledger().timestamp() >= tournament.start_time {
        return Err(Error::TournamentStarted);
    }
    Ok(())
}

// ───────────── LIFECYCLE ─────────────

pub fn create(env: &Env, creator: &Address, params: TournamentParams) -> Result<Tournament, Error> {
    validate(env, creator, &params, None)?;

    escrow::debit(env, creator, &params.prize_pot)?;

    let id = config::next_tournament_id(env)?;
    let tournament = Tournament::from_params(id, creator.clone(), params);
    store(env, &tournament);
    schedule::index_insert(env, creator, id);

    events::tournament_created(env, &tournament);
    Ok(tournament)
}

/// Replaces the tournament's parameters in place. The old prize pot goes
/// back to escrow once and the new one is reserved once.
pub fn edit(
    env: &Env,
    creator: &Address,
    id: u64,
    params: TournamentParams,
) -> Result<Tournament, Error> {
    let existing = load(env, id)?;
    require_owner(&existing, creator)?;
    require_not_started(env, &existing)?;

    validate(env, creator, &params, Some(id))?;

    escrow::credit(env, creator, &existing.prize_pot)?;
    escrow::debit(env, creator, &params.prize_pot)?;

    let updated = Tournament::from_params(id, creator.clone(), params);
    store(env, &updated);

    events::tournament_edited(env, &updated);
    Ok(updated)
}

pub fn cancel(env: &Env, creator: &Address, id: u64) -> Result<Tournament, Error> {
    let tournament = load(env, id)?;
    require_owner(&tournament, creator)?;
    require_not_started(env, &tournament)?;

    escrow::credit(env, creator, &tournament.prize_pot)?;
    delete(env, &tournament);

    events::tournament_cancelled(env, &tournament);
    Ok(tournament)
}

/// Drops the tournament without refunding its prize pot.
pub fn force_cancel(env: &Env, creator: &Address, id: u64) -> Result<Tournament, Error> {
    let tournament = load(env, id)?;
    require_owner(&tournament, creator)?;

    delete(env, &tournament);
    log!(
        env,
        "forced cancel forfeits prize pot",
        tournament.id,
        tournament.prize_pot.amount
    );

    events::tournament_force_cancelled(env, &tournament);
    Ok(tournament)
}
