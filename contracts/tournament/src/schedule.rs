//! Creator index and scheduling-conflict checks.
//!
//! Each creator's tournament ids are kept in ascending order under
//! `DataKey::CreatorTournaments`, so checking a creator's schedule only walks
//! that creator's own tournaments.

use soroban_sdk::{Address, Env, Vec};

use crate::error::Error;
use crate::types::{DataKey, Tournament};

const INDEX_THRESHOLD: u32 = 100_000;
const INDEX_BUMP: u32 = 500_000;

pub fn creator_index(env: &Env, creator: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorTournaments(creator.clone()))
        .unwrap_or(Vec::new(env))
}

fn store_index(env: &Env, creator: &Address, ids: &Vec<u64>) {
    let key = DataKey::CreatorTournaments(creator.clone());
    if ids.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, INDEX_THRESHOLD, INDEX_BUMP);
}

/// Ids are allocated monotonically, so appending keeps the index sorted.
pub fn index_insert(env: &Env, creator: &Address, id: u64) {
    let mut ids = creator_index(env, creator);
    ids.push_back(id);
    store_index(env, creator, &ids);
}

pub fn index_remove(env: &Env, creator: &Address, id: u64) {
    let mut ids = creator_index(env, creator);
    if let Some(pos) = ids.first_index_of(id) {
        ids.remove(pos);
    }
    store_index(env, creator, &ids);
}

/// Two closed intervals of the same game collide unless one ends strictly
/// before the other starts.
pub fn overlaps(existing: &Tournament, game: u64, start: u64, end: u64) -> bool {
    existing.game == game && !(existing.end_time < start || existing.start_time > end)
}

/// Fails with `SchedulingConflict` if any of `creator`'s tournaments, other
/// than `ignore`, runs the same game within `[start, end]`.
///
/// Tournaments that ended before now can no longer collide with anything
/// starting at or after now, so their ids are dropped from the index on the
/// way through. The rows themselves stay readable.
pub fn ensure_no_conflict(
    env: &Env,
    creator: &Address,
    game: u64,
    start: u64,
    end: u64,
    ignore: Option<u64>,
) -> Result<(), Error> {
    let now = env.ledger().timestamp();
    let ids = creator_index(env, creator);
    let mut active: Vec<u64> = Vec::new(env);

    for id in ids.iter() {
        let existing: Option<Tournament> =
            env.storage().persistent().get(&DataKey::Tournament(id));
        let Some(existing) = existing else {
            continue;
        };
        if existing.end_time < now {
            continue;
        }
        active.push_back(id);

        if ignore != Some(id) && overlaps(&existing, game, start, end) {
            return Err(Error::SchedulingConflict);
        }
    }

    if active.len() != ids.len() {
        store_index(env, creator, &active);
    }
    Ok(())
}
