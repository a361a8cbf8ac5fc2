use alloy_sol_types::{SolInterface, SolValue};

use super::{event_registry::require_no_value, host::Host, store::EventStore, EventRegistry};
use crate::types::{
    errors::{EventCreatorError, Result},
    interfaces::IEventCreator::IEventCreatorCalls,
    CallContext,
};

impl<S: EventStore, H: Host> EventRegistry<S, H> {
    /// Executes raw calldata the way the deployed contract routes it and
    /// returns the ABI-encoded return data.
    pub fn dispatch(&mut self, ctx: &CallContext, calldata: &[u8]) -> Result<Vec<u8>> {
        if calldata.is_empty() {
            self.receive(ctx)?;
            return Ok(Vec::new());
        }

        let known = calldata
            .get(..4)
            .and_then(|selector| <[u8; 4]>::try_from(selector).ok())
            .is_some_and(IEventCreatorCalls::valid_selector);
        if !known {
            self.fallback(ctx, calldata)?;
            return Ok(Vec::new());
        }

        let call = IEventCreatorCalls::abi_decode(calldata, true)
            .map_err(|_| EventCreatorError::MalformedCalldata)?;

        match call {
            IEventCreatorCalls::createEvent(call) => {
                let event_index = self.create_event(ctx, call.name, call.deadline)?;
                Ok(event_index.abi_encode())
            }
            IEventCreatorCalls::openRegistration(call) => {
                self.open_registration(ctx, call.eventIndex)?;
                Ok(Vec::new())
            }
            IEventCreatorCalls::closeRegistration(call) => {
                self.close_registration(ctx, call.eventIndex)?;
                Ok(Vec::new())
            }
            IEventCreatorCalls::register(call) => {
                self.register(ctx, call.eventIndex)?;
                Ok(Vec::new())
            }
            IEventCreatorCalls::withdraw(call) => {
                self.withdraw(ctx, call.eventIndex)?;
                Ok(Vec::new())
            }
            IEventCreatorCalls::getParticipants(call) => {
                require_no_value(ctx)?;
                Ok(self.get_participants(call.eventIndex)?.abi_encode())
            }
            IEventCreatorCalls::events(call) => {
                require_no_value(ctx)?;
                let fields = self.event_info(call.eventIndex)?.into_fields();
                Ok(fields.abi_encode_params())
            }
            IEventCreatorCalls::eventCount(_) => {
                require_no_value(ctx)?;
                Ok(self.event_count().abi_encode())
            }
        }
    }
}
