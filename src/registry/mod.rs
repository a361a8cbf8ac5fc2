pub mod event_registry;
pub mod store;
pub mod host;
pub mod dispatch;

pub use event_registry::EventRegistry;
pub use host::{Host, MemoryHost};
pub use store::{EventStore, MemoryStore};

/// Registry backed by the in-memory store and ledger.
pub type MemoryRegistry = EventRegistry<MemoryStore, MemoryHost>;

impl MemoryRegistry {
    pub fn in_memory() -> Self {
        EventRegistry::new(MemoryStore::new(), MemoryHost::new())
    }
}
