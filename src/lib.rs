#[cfg(target_arch = "wasm32")]
extern crate mini_alloc;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: mini_alloc::MiniAlloc = mini_alloc::MiniAlloc::INIT;

pub mod types;
pub mod registry;

#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
pub mod contract;

pub use registry::{EventRegistry, EventStore, Host, MemoryHost, MemoryRegistry, MemoryStore};
pub use types::{
    errors::{EventCreatorError, Result},
    CallContext, EventFields, EventInfo, RegistryConfig,
};

// Export the deployable contract as the default entrypoint
#[cfg(any(target_arch = "wasm32", feature = "export-abi"))]
pub use contract::EventCreator as Contract;
