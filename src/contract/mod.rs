pub mod event_creator;

pub use event_creator::{EventCreator, EvmHost};
