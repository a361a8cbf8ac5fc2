use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

pub mod events;
pub mod errors;
pub mod interfaces;

use errors::{EventCreatorError, Result};

/// 0.05 ether.
pub const DEFAULT_REGISTRATION_FEE: U256 = U256::from_limbs([50_000_000_000_000_000, 0, 0, 0]);
pub const DEFAULT_MAX_PARTICIPANTS: U256 = U256::from_limbs([10, 0, 0, 0]);

pub const ETHER_NOT_ACCEPTED: &str = "This contract does not accept Ether";
pub const FALLBACK_FUNCTION: &str = "Fallback Function";

/// Fee and capacity stamped onto every event at creation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    pub registration_fee: U256,
    pub max_participants: U256,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registration_fee: DEFAULT_REGISTRATION_FEE,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
        }
    }
}

impl RegistryConfig {
    /// A full event must still hold `registration_fee * max_participants`.
    pub fn validate(&self) -> Result<()> {
        if self.max_participants.is_zero() {
            return Err(EventCreatorError::InvalidConfig("maxParticipants must be at least 1"));
        }
        if self
            .registration_fee
            .checked_mul(self.max_participants)
            .is_none()
        {
            return Err(EventCreatorError::InvalidConfig(
                "registrationFee * maxParticipants overflows uint256",
            ));
        }
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| EventCreatorError::MalformedConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| EventCreatorError::MalformedConfig(err.to_string()))
    }
}

/// Caller, attached value and block time of a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub sender: Address,
    pub value: U256,
    pub timestamp: u64,
}

impl CallContext {
    pub fn new(sender: Address, timestamp: u64) -> Self {
        Self {
            sender,
            value: U256::ZERO,
            timestamp,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn now(&self) -> U256 {
        U256::from(self.timestamp)
    }
}

/// A stored event. Participants live beside the record in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub organizer: Address,
    pub name: String,
    pub deadline: U256,
    pub is_open: bool,
    pub max_participants: U256,
    pub registration_fee: U256,
    pub balance: U256,
    pub participant_count: U256,
}

impl EventRecord {
    pub fn new(organizer: Address, name: String, deadline: U256, config: &RegistryConfig) -> Self {
        Self {
            organizer,
            name,
            deadline,
            is_open: true,
            max_participants: config.max_participants,
            registration_fee: config.registration_fee,
            balance: U256::ZERO,
            participant_count: U256::ZERO,
        }
    }

    pub fn is_full(&self) -> bool {
        self.participant_count >= self.max_participants
    }

    // deadline is exclusive
    pub fn deadline_passed(&self, now: U256) -> bool {
        now >= self.deadline
    }

    pub fn info(&self) -> EventInfo {
        EventInfo {
            organizer: self.organizer,
            name: self.name.clone(),
            deadline: self.deadline,
            isOpen: self.is_open,
            maxParticipants: self.max_participants,
            registrationFee: self.registration_fee,
            balance: self.balance,
            participantCount: self.participant_count,
        }
    }
}

pub use interfaces::IEventCreator::EventInfo;

/// Return values of the `events` getter, one per member, in declaration order.
pub type EventFields = (Address, String, U256, bool, U256, U256, U256, U256);

impl EventInfo {
    pub fn into_fields(self) -> EventFields {
        (
            self.organizer,
            self.name,
            self.deadline,
            self.isOpen,
            self.maxParticipants,
            self.registrationFee,
            self.balance,
            self.participantCount,
        )
    }
}
