//! Events for off-chain indexers. Published once, never revised.

use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{Asset, RemovalMark, TokenId, TokenRole, Tournament};

pub fn config_initialized(env: &Env, platform: &Address, custodian: &Address) {
    env.events()
        .publish((symbol_short!("config"), platform.clone()), custodian.clone());
}

pub fn config_removed(env: &Env, platform: &Address) {
    env.events()
        .publish((symbol_short!("config_rm"), platform.clone()), ());
}

pub fn token_added(env: &Env, token: &TokenId, role: TokenRole) {
    env.events()
        .publish((symbol_short!("token"), role), token.clone());
}

pub fn creator_added(env: &Env, creator: &Address) {
    env.events()
        .publish((symbol_short!("creator"), creator.clone()), ());
}

pub fn creator_removed(env: &Env, creator: &Address) {
    env.events()
        .publish((symbol_short!("creatr_rm"), creator.clone()), ());
}

/// Audit record mirroring every creation parameter.
pub fn tournament_created(env: &Env, tournament: &Tournament) {
    env.events().publish(
        (
            symbol_short!("trn_new"),
            tournament.creator.clone(),
            tournament.id,
        ),
        tournament.clone(),
    );
}

pub fn tournament_edited(env: &Env, tournament: &Tournament) {
    env.events().publish(
        (
            symbol_short!("trn_edit"),
            tournament.creator.clone(),
            tournament.id,
        ),
        tournament.clone(),
    );
}

pub fn tournament_cancelled(env: &Env, tournament: &Tournament) {
    env.events().publish(
        (
            symbol_short!("trn_cncl"),
            tournament.creator.clone(),
            tournament.id,
        ),
        tournament.prize_pot.clone(),
    );
}

/// Carries the prize pot that was forfeited rather than refunded.
pub fn tournament_force_cancelled(env: &Env, tournament: &Tournament) {
    env.events().publish(
        (
            symbol_short!("trn_force"),
            tournament.creator.clone(),
            tournament.id,
        ),
        tournament.prize_pot.clone(),
    );
}

pub fn deposit_credited(env: &Env, creator: &Address, asset: &Asset) {
    env.events()
        .publish((symbol_short!("deposit"), creator.clone()), asset.clone());
}

pub fn removal_marked(env: &Env, creator: &Address, mark: &RemovalMark) {
    env.events()
        .publish((symbol_short!("removal"), creator.clone()), mark.clone());
}
