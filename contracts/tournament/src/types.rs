use soroban_sdk::{contracttype, Address, Map, String, Symbol, Vec};

//
// ──────────────────────────────────────────────────────────
// TOKENS
// ──────────────────────────────────────────────────────────
//

/// Identifies a fungible asset: issuing contract, currency code and precision.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenId {
    pub contract: Address,
    pub code: Symbol,
    pub decimals: u32,
}

/// An amount of a given token. Amounts are never negative.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Asset {
    pub token: TokenId,
    pub amount: i128,
}

/// Which whitelist a token belongs to.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenRole {
    Fee = 0,
    Stake = 1,
}

//
// ──────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Configuration {
    pub tournament_counter: u64,
    pub fee_tokens: Vec<TokenId>,
    pub stake_tokens: Vec<TokenId>,
    /// Account every deposit is relayed to.
    pub custodian: Address,
}

//
// ──────────────────────────────────────────────────────────
// CREATORS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    pub stake_available: bool,
    pub nft_available: bool,
    pub pot_available: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Creator {
    pub metadata: String,
    pub capabilities: Capabilities,
    pub fee_token_overrides: Vec<TokenId>,
    pub stake_token_overrides: Vec<TokenId>,
    pub escrow_balances: Map<TokenId, i128>,
}

//
// ──────────────────────────────────────────────────────────
// TOURNAMENTS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrizePotPolicy {
    /// The pot is a guaranteed minimum; entry fees only count above it.
    Minimum = 0,
    /// The pot is added on top of collected entry fees.
    Bonus = 1,
}

/// Everything a creator chooses when creating or editing a tournament.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TournamentParams {
    pub name: String,
    pub game: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub fee: Asset,
    pub stake: Asset,
    pub nft: Option<String>,
    pub prize_pot: Asset,
    pub pot_policy: PrizePotPolicy,
    pub recreate: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tournament {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub game: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub fee: Asset,
    pub stake: Asset,
    pub nft: Option<String>,
    pub prize_pot: Asset,
    pub pot_policy: PrizePotPolicy,
    pub recreate: bool,
}

impl Tournament {
    pub fn from_params(id: u64, creator: Address, params: TournamentParams) -> Self {
        Tournament {
            id,
            creator,
            name: params.name,
            game: params.game,
            start_time: params.start_time,
            end_time: params.end_time,
            fee: params.fee,
            stake: params.stake,
            nft: params.nft,
            prize_pot: params.prize_pot,
            pot_policy: params.pot_policy,
            recreate: params.recreate,
        }
    }
}

/// Latest request from a creator to drop a participant from a tournament.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemovalMark {
    pub account: Address,
    pub tournament_id: u64,
    pub timestamp: u64,
    pub kind: Symbol,
}

//
// ──────────────────────────────────────────────────────────
// DEPOSITS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InboundTransfer {
    pub from: Address,
    pub to: Address,
    pub token: TokenId,
    pub amount: i128,
    pub memo: String,
}

//
// ──────────────────────────────────────────────────────────
// DATA KEYS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Platform,                     // Address
    Config,                       // Configuration
    LastTournamentId,             // u64, survives config teardown
    Creator(Address),             // Creator
    Tournament(u64),              // Tournament
    CreatorTournaments(Address),  // Vec<u64>, ascending
    RemovalMark(Address),         // RemovalMark
}
