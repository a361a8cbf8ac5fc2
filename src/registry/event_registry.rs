use alloy_primitives::{Address, U256};

use super::{host::Host, store::EventStore};
use crate::types::{
    errors::{require, EventCreatorError, Result},
    events::*,
    CallContext, EventInfo, EventRecord, RegistryConfig,
};

/// Event lifecycle state machine.
///
/// Every action validates all of its guards before touching the store or the
/// host, so a failed action leaves no trace: no state change, no transfer, no
/// log. The only action with an external interaction is [`withdraw`], which
/// zeroes the event balance and raises the store lock before handing value to
/// the host.
///
/// [`withdraw`]: EventRegistry::withdraw
#[derive(Debug)]
pub struct EventRegistry<S, H> {
    store: S,
    host: H,
    config: RegistryConfig,
}

impl<S: EventStore, H: Host> EventRegistry<S, H> {
    pub fn new(store: S, host: H) -> Self {
        Self {
            store,
            host,
            config: RegistryConfig::default(),
        }
    }

    pub fn with_config(store: S, host: H, config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            host,
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (S, H) {
        (self.store, self.host)
    }

    pub fn create_event(&mut self, ctx: &CallContext, name: String, deadline: U256) -> Result<U256> {
        require_no_value(ctx)?;
        require(deadline > ctx.now(), EventCreatorError::InvalidDeadline)?;

        let record = EventRecord::new(ctx.sender, name.clone(), deadline, &self.config);
        let event_index = self.store.append(record);

        self.host.log(
            EventCreated {
                event_index,
                organizer: ctx.sender,
                name,
                deadline,
            }
            .into(),
        );

        Ok(event_index)
    }

    pub fn open_registration(&mut self, ctx: &CallContext, event_index: U256) -> Result<()> {
        require_no_value(ctx)?;
        let mut event = self.load(event_index)?;

        require(!event.is_open, EventCreatorError::AlreadyOpen)?;
        require(!event.deadline_passed(ctx.now()), EventCreatorError::DeadlinePassed)?;
        require(!event.is_full(), EventCreatorError::CapacityReached)?;

        event.is_open = true;
        self.store.save(event_index, &event);

        self.host.log(
            RegistrationOpened {
                event_index,
                caller: ctx.sender,
            }
            .into(),
        );
        Ok(())
    }

    pub fn close_registration(&mut self, ctx: &CallContext, event_index: U256) -> Result<()> {
        require_no_value(ctx)?;
        let mut event = self.load(event_index)?;

        require(event.is_open, EventCreatorError::AlreadyClosed)?;

        event.is_open = false;
        self.store.save(event_index, &event);

        self.host.log(
            RegistrationClosed {
                event_index,
                caller: ctx.sender,
            }
            .into(),
        );
        Ok(())
    }

    pub fn register(&mut self, ctx: &CallContext, event_index: U256) -> Result<()> {
        let mut event = self.load(event_index)?;
        let participant = ctx.sender;

        require(participant != event.organizer, EventCreatorError::OrganizerCannotRegister)?;
        require(event.is_open, EventCreatorError::RegistrationClosed)?;
        require(!event.deadline_passed(ctx.now()), EventCreatorError::DeadlinePassed)?;
        require(
            !self.store.is_participant(event_index, participant),
            EventCreatorError::AlreadyRegistered,
        )?;
        if ctx.value < event.registration_fee {
            return Err(EventCreatorError::too_low(ctx.value, event.registration_fee));
        }
        if ctx.value > event.registration_fee {
            return Err(EventCreatorError::too_much(ctx.value, event.registration_fee));
        }

        let balance = event
            .balance
            .checked_add(ctx.value)
            .ok_or(EventCreatorError::BalanceOverflow)?;

        self.host.collect(participant, ctx.value)?;

        self.store.add_participant(event_index, participant);
        event.participant_count += U256::from(1);
        event.balance = balance;

        let filled = event.is_full();
        if filled {
            event.is_open = false;
        }
        self.store.save(event_index, &event);

        self.host.log(
            ParticipantRegistered {
                event_index,
                participant,
                fee: ctx.value,
                participant_count: event.participant_count,
            }
            .into(),
        );
        if filled {
            self.host.log(
                RegistrationClosed {
                    event_index,
                    caller: participant,
                }
                .into(),
            );
        }

        Ok(())
    }

    pub fn withdraw(&mut self, ctx: &CallContext, event_index: U256) -> Result<()> {
        require_no_value(ctx)?;
        require(!self.store.is_locked(), EventCreatorError::Reentrancy)?;

        let mut event = self.load(event_index)?;
        require(ctx.sender == event.organizer, EventCreatorError::NotOrganizer)?;
        require(!event.is_open, EventCreatorError::EventStillOpen)?;
        require(!event.balance.is_zero(), EventCreatorError::NoFunds)?;

        let amount = event.balance;
        event.balance = U256::ZERO;
        self.store.save(event_index, &event);

        self.store.set_locked(true);
        let transfer = self.host.transfer(event.organizer, amount);
        self.store.set_locked(false);

        if let Err(err) = transfer {
            event.balance = amount;
            self.store.save(event_index, &event);
            return Err(err);
        }

        self.host.log(
            FundsWithdrawn {
                event_index,
                organizer: event.organizer,
                amount,
            }
            .into(),
        );
        Ok(())
    }

    pub fn get_participants(&self, event_index: U256) -> Result<Vec<Address>> {
        self.load(event_index)?;
        Ok(self.store.participants(event_index))
    }

    pub fn event_info(&self, event_index: U256) -> Result<EventInfo> {
        Ok(self.load(event_index)?.info())
    }

    pub fn event_count(&self) -> U256 {
        self.store.event_count()
    }

    /// Plain value transfers are never accepted.
    pub fn receive(&mut self, _ctx: &CallContext) -> Result<()> {
        Err(EventCreatorError::EtherNotAccepted)
    }

    /// Calls that match no action.
    pub fn fallback(&mut self, _ctx: &CallContext, _calldata: &[u8]) -> Result<()> {
        Err(EventCreatorError::FallbackFunction)
    }

    fn load(&self, event_index: U256) -> Result<EventRecord> {
        self.store
            .load(event_index)
            .ok_or(EventCreatorError::EventNotFound)
    }
}

pub(crate) fn require_no_value(ctx: &CallContext) -> Result<()> {
    require(ctx.value.is_zero(), EventCreatorError::NonPayable)
}
