use alloy_primitives::{Address, U256};

use crate::types::EventRecord;

/// Append-only event storage keyed by position.
pub trait EventStore {
    fn event_count(&self) -> U256;

    fn load(&self, index: U256) -> Option<EventRecord>;

    /// Appends `record` and returns its index.
    fn append(&mut self, record: EventRecord) -> U256;

    /// Overwrites an existing record. Unknown indices are ignored.
    fn save(&mut self, index: U256, record: &EventRecord);

    fn participants(&self, index: U256) -> Vec<Address>;

    fn is_participant(&self, index: U256, who: Address) -> bool;

    fn add_participant(&mut self, index: U256, who: Address);

    fn is_locked(&self) -> bool;

    fn set_locked(&mut self, locked: bool);
}

impl<T: EventStore + ?Sized> EventStore for &mut T {
    fn event_count(&self) -> U256 {
        (**self).event_count()
    }

    fn load(&self, index: U256) -> Option<EventRecord> {
        (**self).load(index)
    }

    fn append(&mut self, record: EventRecord) -> U256 {
        (**self).append(record)
    }

    fn save(&mut self, index: U256, record: &EventRecord) {
        (**self).save(index, record)
    }

    fn participants(&self, index: U256) -> Vec<Address> {
        (**self).participants(index)
    }

    fn is_participant(&self, index: U256, who: Address) -> bool {
        (**self).is_participant(index, who)
    }

    fn add_participant(&mut self, index: U256, who: Address) {
        (**self).add_participant(index, who)
    }

    fn is_locked(&self) -> bool {
        (**self).is_locked()
    }

    fn set_locked(&mut self, locked: bool) {
        (**self).set_locked(locked)
    }
}

#[derive(Debug, Clone)]
struct StoredEvent {
    record: EventRecord,
    participants: Vec<Address>,
}

/// Vector-backed store used off-chain.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    events: Vec<StoredEvent>,
    locked: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, index: U256) -> Option<&StoredEvent> {
        let index = usize::try_from(index).ok()?;
        self.events.get(index)
    }

    fn slot_mut(&mut self, index: U256) -> Option<&mut StoredEvent> {
        let index = usize::try_from(index).ok()?;
        self.events.get_mut(index)
    }
}

impl EventStore for MemoryStore {
    fn event_count(&self) -> U256 {
        U256::from(self.events.len())
    }

    fn load(&self, index: U256) -> Option<EventRecord> {
        self.slot(index).map(|slot| slot.record.clone())
    }

    fn append(&mut self, record: EventRecord) -> U256 {
        let index = U256::from(self.events.len());
        self.events.push(StoredEvent {
            record,
            participants: Vec::new(),
        });
        index
    }

    fn save(&mut self, index: U256, record: &EventRecord) {
        if let Some(slot) = self.slot_mut(index) {
            slot.record = record.clone();
        }
    }

    fn participants(&self, index: U256) -> Vec<Address> {
        self.slot(index)
            .map(|slot| slot.participants.clone())
            .unwrap_or_default()
    }

    fn is_participant(&self, index: U256, who: Address) -> bool {
        self.slot(index)
            .map(|slot| slot.participants.contains(&who))
            .unwrap_or(false)
    }

    fn add_participant(&mut self, index: U256, who: Address) {
        if let Some(slot) = self.slot_mut(index) {
            slot.participants.push(who);
        }
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
