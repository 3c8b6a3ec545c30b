use soroban_sdk::contracterror;

/// Custom error codes for the tournament contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotConfigured = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    CreatorNotFound = 4,
    TournamentNotFound = 5,
    CreatorExists = 6,
    DuplicateToken = 7,
    InvalidTimestamps = 8,
    InvalidDuration = 9,
    UnsupportedGame = 10,
    InvalidAmount = 11,
    PotTokenMismatch = 12,
    TournamentStarted = 13,
    UnsupportedToken = 14,
    SchedulingConflict = 15,
    StakeNotAllowed = 16,
    PotNotAllowed = 17,
    NftNotAllowed = 18,
    InsufficientFunds = 19,
    BalanceOverflow = 20,
}

impl Error {
    /// Stable, human-readable rejection reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NotConfigured => "Configuration has not been initialized",
            Error::AlreadyInitialized => "Configuration is already initialized",
            Error::Unauthorized => "Caller is not allowed to perform this action",
            Error::CreatorNotFound => "No creator with this account exists",
            Error::TournamentNotFound => "No tournament with this id exists",
            Error::CreatorExists => "Creator already exists",
            Error::DuplicateToken => "This token is already supported",
            Error::InvalidTimestamps => {
                "Start must not be in the past and must be earlier than end"
            }
            Error::InvalidDuration => "Duration must be between 1 and 168 hours",
            Error::UnsupportedGame => "Unsupported game",
            Error::InvalidAmount => "Amounts must not be negative",
            Error::PotTokenMismatch => "Entry fee and prize pot tokens are different",
            Error::TournamentStarted => "Tournament has already started",
            Error::UnsupportedToken => "The specified token is not supported",
            Error::SchedulingConflict => "Two tournaments of the same game at the same time are not allowed",
            Error::StakeNotAllowed => "Stake requirement is not allowed",
            Error::PotNotAllowed => "Prize pot is not allowed",
            Error::NftNotAllowed => "NFT requirement is not allowed",
            Error::InsufficientFunds => "Insufficient escrow balance",
            Error::BalanceOverflow => "Escrow balance overflow",
        }
    }
}
