#![no_std]

//! Creator-run tournaments with escrowed prize pots.
//!
//! Creators registered by the platform schedule tournaments for supported
//! games. A tournament's prize pot is reserved from the creator's escrow
//! balance when it is created, swapped when it is edited and released when
//! the creator cancels it. Escrow is topped up through inbound transfers
//! carrying the `add-funds` memo, which are relayed to a custodian.
//!
//! Every entrypoint either applies all of its writes or, on error, none.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod config;
mod creators;
mod deposit;
mod error;
mod escrow;
mod events;
mod schedule;
mod tournaments;
mod types;


pub use deposit::{DepositMemo, ADD_FUNDS_MEMO, ADD_TOKENS_MEMO};
pub use error::Error;
pub use tournaments::{MAX_DURATION_HOURS, MIN_DURATION_HOURS, SUPPORTED_GAMES};
pub use types::{
    Asset, Capabilities, Configuration, Creator, InboundTransfer, PrizePotPolicy, RemovalMark,
    TokenId, TokenRole, Tournament, TournamentParams,
};

use types::DataKey;

#[contract]
pub struct TournamentContract;

#[contractimpl]
impl TournamentContract {
    // ───────────── CONFIGURATION ─────────────

    /// Create the configuration singleton.
    ///
    /// The first call claims `platform` as the platform authority; later
    /// calls (after `remove_config`) must come from the same address.
    ///
    /// # Arguments
    /// * `platform` - Platform authority
    /// * `custodian` - Account that receives every relayed deposit
    pub fn init_config(env: Env, platform: Address, custodian: Address) -> Result<(), Error> {
        config::claim_platform(&env, &platform)?;
        config::initialize(&env, custodian.clone())?;

        events::config_initialized(&env, &platform, &custodian);
        Ok(())
    }

    /// Delete the configuration singleton. Irreversible until `init_config`
    /// is called again.
    pub fn remove_config(env: Env, platform: Address) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;
        config::teardown(&env)?;

        events::config_removed(&env, &platform);
        Ok(())
    }

    /// Whitelist a token for use as entry fee or stake by every creator.
    pub fn add_supported_token(
        env: Env,
        platform: Address,
        token: TokenId,
        role: TokenRole,
    ) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;

        let updated = config::with_token(config::load(&env)?, token.clone(), role)?;
        config::store(&env, &updated);

        events::token_added(&env, &token, role);
        Ok(())
    }

    // ───────────── CREATORS ─────────────

    pub fn add_creator(
        env: Env,
        platform: Address,
        creator: Address,
        metadata: String,
        capabilities: Capabilities,
        fee_token_overrides: Vec<TokenId>,
        stake_token_overrides: Vec<TokenId>,
    ) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;
        creators::register(
            &env,
            &creator,
            metadata,
            capabilities,
            fee_token_overrides,
            stake_token_overrides,
        )?;

        events::creator_added(&env, &creator);
        Ok(())
    }

    /// Remove a creator record.
    ///
    /// Neither remaining escrow nor scheduled tournaments are checked; the
    /// platform has to settle both before calling this.
    pub fn remove_creator(env: Env, platform: Address, creator: Address) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;
        creators::unregister(&env, &creator)?;

        events::creator_removed(&env, &creator);
        Ok(())
    }

    // ───────────── TOURNAMENTS ─────────────

    /// Create a tournament and reserve its prize pot from escrow.
    ///
    /// # Returns
    /// The new tournament id.
    ///
    /// # Errors
    /// - `CreatorNotFound`: `creator` is not registered
    /// - `InvalidTimestamps` / `InvalidDuration` / `UnsupportedGame`
    /// - `UnsupportedToken`: fee or stake token not whitelisted for `creator`
    /// - `SchedulingConflict`: overlaps another tournament of the same game
    /// - `PotTokenMismatch`: paid entry in a token other than the prize pot's
    /// - `StakeNotAllowed` / `PotNotAllowed` / `NftNotAllowed`
    /// - `InsufficientFunds`: escrow cannot cover the prize pot
    pub fn create_tournament(
        env: Env,
        creator: Address,
        params: TournamentParams,
    ) -> Result<u64, Error> {
        creator.require_auth();
        let tournament = tournaments::create(&env, &creator, params)?;
        Ok(tournament.id)
    }

    /// Replace the parameters of a tournament that has not started yet.
    pub fn edit_tournament(
        env: Env,
        creator: Address,
        tournament_id: u64,
        params: TournamentParams,
    ) -> Result<(), Error> {
        creator.require_auth();
        tournaments::edit(&env, &creator, tournament_id, params)?;
        Ok(())
    }

    /// Cancel a tournament before it starts and refund its prize pot.
    pub fn cancel_tournament(env: Env, creator: Address, tournament_id: u64) -> Result<(), Error> {
        creator.require_auth();
        tournaments::cancel(&env, &creator, tournament_id)?;
        Ok(())
    }

    /// Platform-initiated cancellation. The prize pot is forfeited, not
    /// refunded.
    pub fn forced_cancel_tournament(
        env: Env,
        platform: Address,
        creator: Address,
        tournament_id: u64,
    ) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;
        tournaments::force_cancel(&env, &creator, tournament_id)?;
        Ok(())
    }

    /// Ask downstream systems to drop `account` from a tournament. Only the
    /// latest mark per creator is kept.
    pub fn mark_removal(
        env: Env,
        creator: Address,
        account: Address,
        tournament_id: u64,
        kind: Symbol,
    ) -> Result<(), Error> {
        creator.require_auth();

        let tournament = tournaments::load(&env, tournament_id)?;
        if tournament.creator != creator {
            return Err(Error::Unauthorized);
        }

        let mark = RemovalMark {
            account,
            tournament_id,
            timestamp: env.ledger().timestamp(),
            kind,
        };
        env.storage()
            .persistent()
            .set(&DataKey::RemovalMark(creator.clone()), &mark);

        events::removal_marked(&env, &creator, &mark);
        Ok(())
    }

    // ───────────── DEPOSITS ─────────────

    /// Entry point for transfers into creator escrow.
    ///
    /// Only transfers addressed to this contract with the `add-funds` memo
    /// are credited; anything else is accepted and ignored.
    pub fn on_inbound_transfer(env: Env, transfer: InboundTransfer) -> Result<(), Error> {
        transfer.from.require_auth();
        deposit::on_inbound_transfer(&env, transfer)?;
        Ok(())
    }

    /// Credit `creator`'s escrow on the platform's behalf. The platform pays
    /// the asset, which is relayed to the custodian like any deposit.
    pub fn deposit_credit_admin(
        env: Env,
        platform: Address,
        creator: Address,
        token: TokenId,
        amount: i128,
    ) -> Result<(), Error> {
        config::require_platform(&env, &platform)?;
        deposit::credit_and_relay(&env, &platform, &creator, Asset { token, amount })
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    pub fn get_config(env: Env) -> Result<Configuration, Error> {
        config::load(&env)
    }

    pub fn get_creator(env: Env, creator: Address) -> Option<Creator> {
        creators::find(&env, &creator)
    }

    pub fn is_token_supported(
        env: Env,
        creator: Address,
        token: TokenId,
        role: TokenRole,
    ) -> Result<bool, Error> {
        creators::is_token_supported(&env, &creator, &token, role)
    }

    pub fn get_escrow_balance(env: Env, creator: Address, token: TokenId) -> i128 {
        creators::find(&env, &creator)
            .map(|record| escrow::balance(&record, &token))
            .unwrap_or(0)
    }

    pub fn get_tournament(env: Env, tournament_id: u64) -> Option<Tournament> {
        tournaments::load(&env, tournament_id).ok()
    }

    /// Ids of `creator`'s tournaments, ascending.
    pub fn get_creator_tournaments(env: Env, creator: Address) -> Vec<u64> {
        schedule::creator_index(&env, &creator)
    }

    pub fn get_removal_mark(env: Env, creator: Address) -> Option<RemovalMark> {
        env.storage()
            .persistent()
            .get(&DataKey::RemovalMark(creator))
    }
}
