use alloy_primitives::{Address, U256};
use stylus_sdk::{
    block, call, evm, msg,
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageMap, StorageString, StorageU256, StorageVec},
    ArbResult,
};

use crate::registry::{EventRegistry, EventStore, Host};
use crate::types::{
    errors::{EventCreatorError, Result},
    events::RegistryLog,
    CallContext, EventFields, EventRecord,
};

#[storage]
pub struct StoredEvent {
    organizer: StorageAddress,
    name: StorageString,
    deadline: StorageU256,
    is_open: StorageBool,
    max_participants: StorageU256,
    registration_fee: StorageU256,
    balance: StorageU256,
    participants: StorageVec<StorageAddress>,
    registered: StorageMap<Address, StorageBool>,
}

impl StoredEvent {
    fn write(&mut self, record: &EventRecord) {
        self.organizer.set(record.organizer);
        self.name.set_str(&record.name);
        self.deadline.set(record.deadline);
        self.is_open.set(record.is_open);
        self.max_participants.set(record.max_participants);
        self.registration_fee.set(record.registration_fee);
        self.balance.set(record.balance);
    }

    fn read(&self) -> EventRecord {
        EventRecord {
            organizer: self.organizer.get(),
            name: self.name.get_string(),
            deadline: self.deadline.get(),
            is_open: self.is_open.get(),
            max_participants: self.max_participants.get(),
            registration_fee: self.registration_fee.get(),
            balance: self.balance.get(),
            participant_count: U256::from(self.participants.len()),
        }
    }
}

/// Contract storage seen through [`EventStore`].
#[storage]
pub struct EventBook {
    events: StorageVec<StoredEvent>,
    locked: StorageBool,
}

impl EventStore for EventBook {
    fn event_count(&self) -> U256 {
        U256::from(self.events.len())
    }

    fn load(&self, index: U256) -> Option<EventRecord> {
        self.events.getter(index).map(|event| event.read())
    }

    fn append(&mut self, record: EventRecord) -> U256 {
        let index = U256::from(self.events.len());
        let mut slot = self.events.grow();
        slot.write(&record);
        index
    }

    fn save(&mut self, index: U256, record: &EventRecord) {
        if let Some(mut slot) = self.events.setter(index) {
            slot.write(record);
        }
    }

    fn participants(&self, index: U256) -> Vec<Address> {
        let Some(event) = self.events.getter(index) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for i in 0..event.participants.len() {
            if let Some(participant) = event.participants.get(i) {
                result.push(participant);
            }
        }
        result
    }

    fn is_participant(&self, index: U256, who: Address) -> bool {
        self.events
            .getter(index)
            .map(|event| event.registered.get(who))
            .unwrap_or(false)
    }

    fn add_participant(&mut self, index: U256, who: Address) {
        if let Some(mut event) = self.events.setter(index) {
            event.participants.push(who);
            event.registered.insert(who, true);
        }
    }

    fn is_locked(&self) -> bool {
        self.locked.get()
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked.set(locked);
    }
}

/// Value arrives with the call; transfers and logs go straight to the EVM.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmHost;

impl Host for EvmHost {
    fn collect(&mut self, _from: Address, _amount: U256) -> Result<()> {
        Ok(())
    }

    fn transfer(&mut self, to: Address, amount: U256) -> Result<()> {
        call::transfer_eth(to, amount).map_err(|_| EventCreatorError::TransferFailed)
    }

    fn log(&mut self, log: RegistryLog) {
        match log {
            RegistryLog::EventCreated(event) => evm::log(event),
            RegistryLog::RegistrationOpened(event) => evm::log(event),
            RegistryLog::RegistrationClosed(event) => evm::log(event),
            RegistryLog::ParticipantRegistered(event) => evm::log(event),
            RegistryLog::FundsWithdrawn(event) => evm::log(event),
        }
    }
}

#[storage]
#[entrypoint]
pub struct EventCreator {
    book: EventBook,
}

#[public]
impl EventCreator {
    pub fn create_event(&mut self, name: String, deadline: U256) -> Result<U256> {
        let ctx = current_context();
        self.registry().create_event(&ctx, name, deadline)
    }

    pub fn open_registration(&mut self, event_index: U256) -> Result<()> {
        let ctx = current_context();
        self.registry().open_registration(&ctx, event_index)
    }

    pub fn close_registration(&mut self, event_index: U256) -> Result<()> {
        let ctx = current_context();
        self.registry().close_registration(&ctx, event_index)
    }

    #[payable]
    pub fn register(&mut self, event_index: U256) -> Result<()> {
        let ctx = current_context();
        self.registry().register(&ctx, event_index)
    }

    pub fn withdraw(&mut self, event_index: U256) -> Result<()> {
        let ctx = current_context();
        self.registry().withdraw(&ctx, event_index)
    }

    // View functions
    pub fn get_participants(&self, event_index: U256) -> Result<Vec<Address>> {
        self.book.load(event_index).ok_or(EventCreatorError::EventNotFound)?;
        Ok(self.book.participants(event_index))
    }

    pub fn events(&self, event_index: U256) -> Result<EventFields> {
        let event = self
            .book
            .load(event_index)
            .ok_or(EventCreatorError::EventNotFound)?;
        Ok(event.info().into_fields())
    }

    pub fn event_count(&self) -> U256 {
        self.book.event_count()
    }

    #[receive]
    #[payable]
    pub fn receive(&mut self) -> core::result::Result<(), Vec<u8>> {
        let ctx = current_context();
        self.registry().receive(&ctx).map_err(Into::into)
    }

    #[fallback]
    #[payable]
    pub fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        let ctx = current_context();
        self.registry().fallback(&ctx, calldata)?;
        Ok(Vec::new())
    }
}

// Internal helper functions
impl EventCreator {
    fn registry(&mut self) -> EventRegistry<&mut EventBook, EvmHost> {
        EventRegistry::new(&mut self.book, EvmHost)
    }
}

fn current_context() -> CallContext {
    CallContext::new(msg::sender(), block::timestamp()).with_value(msg::value())
}
