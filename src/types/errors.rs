use core::fmt;

use alloy_primitives::U256;
use alloy_sol_types::{sol, Revert, SolError};

use super::{ETHER_NOT_ACCEPTED, FALLBACK_FUNCTION};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error TooLow(uint256 sent, uint256 required);

    #[derive(Debug, PartialEq, Eq)]
    error TooMuch(uint256 sent, uint256 required);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCreatorError {
    InvalidDeadline,
    EventNotFound,
    AlreadyOpen,
    AlreadyClosed,
    DeadlinePassed,
    CapacityReached,
    OrganizerCannotRegister,
    RegistrationClosed,
    AlreadyRegistered,
    TooLow(TooLow),
    TooMuch(TooMuch),
    NotOrganizer,
    EventStillOpen,
    NoFunds,
    TransferFailed,
    Reentrancy,
    NonPayable,
    EtherNotAccepted,
    FallbackFunction,
    MalformedCalldata,
    InvalidConfig(&'static str),
    MalformedConfig(String),
    BalanceOverflow,
}

impl EventCreatorError {
    /// Revert reason carried by `Error(string)`.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidDeadline => "Deadline must be in the future.",
            Self::EventNotFound => "Event does not exist.",
            Self::AlreadyOpen => "Registration is already open.",
            Self::AlreadyClosed => "Registration is already closed.",
            Self::DeadlinePassed => "Event deadline has passed.",
            Self::CapacityReached => "Cannot reopen: Max participants reached.",
            Self::OrganizerCannotRegister => "Organizer cannot register for their own event.",
            Self::RegistrationClosed => "Registration is closed.",
            Self::AlreadyRegistered => "Address has already registered for this event.",
            Self::TooLow(_) => "Registration fee too low.",
            Self::TooMuch(_) => "Registration fee too high.",
            Self::NotOrganizer => "Only the organizer can withdraw.",
            Self::EventStillOpen => "Registration must be closed before withdrawal.",
            Self::NoFunds => "No funds available to withdraw.",
            Self::TransferFailed => "Transfer failed.",
            Self::Reentrancy => "Reentrant call",
            Self::NonPayable => "Function does not accept Ether.",
            Self::EtherNotAccepted => ETHER_NOT_ACCEPTED,
            Self::FallbackFunction => FALLBACK_FUNCTION,
            Self::MalformedCalldata => "Malformed calldata.",
            Self::InvalidConfig(reason) => reason,
            Self::MalformedConfig(_) => "Malformed registry config.",
            Self::BalanceOverflow => "Event balance overflow.",
        }
    }

    pub fn too_low(sent: U256, required: U256) -> Self {
        Self::TooLow(TooLow { sent, required })
    }

    pub fn too_much(sent: U256, required: U256) -> Self {
        Self::TooMuch(TooMuch { sent, required })
    }

    /// ABI revert data: custom errors for fee mismatches, `Error(string)` otherwise.
    pub fn revert_data(&self) -> Vec<u8> {
        match self {
            Self::TooLow(err) => err.abi_encode(),
            Self::TooMuch(err) => err.abi_encode(),
            other => Revert {
                reason: other.message().to_string(),
            }
            .abi_encode(),
        }
    }
}

impl fmt::Display for EventCreatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow(err) => write!(
                f,
                "{} sent {} wei, required {} wei",
                self.message(),
                err.sent,
                err.required
            ),
            Self::TooMuch(err) => write!(
                f,
                "{} sent {} wei, required {} wei",
                self.message(),
                err.sent,
                err.required
            ),
            Self::MalformedConfig(detail) => write!(f, "{} {}", self.message(), detail),
            other => f.write_str(other.message()),
        }
    }
}

impl std::error::Error for EventCreatorError {}

impl From<EventCreatorError> for Vec<u8> {
    fn from(err: EventCreatorError) -> Vec<u8> {
        err.revert_data()
    }
}

pub type Result<T> = core::result::Result<T, EventCreatorError>;

pub fn require(condition: bool, err: EventCreatorError) -> Result<()> {
    if !condition {
        Err(err)
    } else {
        Ok(())
    }
}
