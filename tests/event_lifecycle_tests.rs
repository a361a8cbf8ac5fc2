
use alloy_primitives::U256;
use event_creator_contracts::{
    types::{
        events::{EventCreated, RegistrationClosed, RegistrationOpened, RegistryLog},
        DEFAULT_MAX_PARTICIPANTS,
    },
    EventCreatorError,
};
use test_utils::*;

#[cfg(test)]
mod event_lifecycle_tests {
    use super::*;

    #[test]
    fn test_create_event() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();

        assert_eq!(event_index, U256::ZERO);

        let event = context.registry.event_info(event_index).expect("Get event failed");
        assert_eq!(event.name, "Test Event");
        assert_eq!(event.organizer, context.organizer());
        assert!(event.isOpen);
        assert_eq!(event.deadline, U256::from(START_TIMESTAMP + ONE_HOUR));
        assert_eq!(event.maxParticipants, DEFAULT_MAX_PARTICIPANTS);
        assert_eq!(event.registrationFee, default_fee());
        assert_eq!(event.balance, U256::ZERO);
        assert_eq!(event.participantCount, U256::ZERO);
    }

    #[test]
    fn test_create_event_emits_log() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();

        assert_eq!(
            context.registry.host().logs(),
            &[RegistryLog::EventCreated(EventCreated {
                event_index,
                organizer: context.organizer(),
                name: "Test Event".to_string(),
                deadline: U256::from(START_TIMESTAMP + ONE_HOUR),
            })]
        );
    }

    #[test]
    fn test_event_indices_are_sequential() {
        let mut context = TestContext::new();

        for expected in 0..5u64 {
            let creator = context.participant(expected as usize);
            let ctx = context.ctx(creator);
            let index = context
                .registry
                .create_event(&ctx, format!("Event {}", expected), U256::from(START_TIMESTAMP + ONE_HOUR))
                .expect("Event creation failed");
            assert_eq!(index, U256::from(expected));

            let event = context.registry.event_info(index).expect("Get event failed");
            assert_eq!(event.organizer, creator);
        }

        assert_eq!(context.registry.event_count(), U256::from(5));
    }

    #[test]
    fn test_create_event_with_past_deadline_fails() {
        let mut context = TestContext::new();
        let ctx = context.ctx(context.organizer());

        let result = context.registry.create_event(
            &ctx,
            "Past Event".to_string(),
            U256::from(START_TIMESTAMP - ONE_HOUR),
        );

        expect_error(result, "Deadline must be in the future.");
        assert_eq!(context.registry.event_count(), U256::ZERO);
        assert!(context.registry.host().logs().is_empty());
    }

    #[test]
    fn test_create_event_with_current_timestamp_fails() {
        let mut context = TestContext::new();
        let ctx = context.ctx(context.organizer());

        let result = context
            .registry
            .create_event(&ctx, "Now".to_string(), U256::from(START_TIMESTAMP));

        assert_eq!(result, Err(EventCreatorError::InvalidDeadline));
        assert_eq!(context.registry.event_count(), U256::ZERO);
    }

    #[test]
    fn test_create_event_with_maximum_name_length() {
        let mut context = TestContext::new();
        let ctx = context.ctx(context.organizer());
        let long_name = "A".repeat(256);

        let index = context
            .registry
            .create_event(&ctx, long_name.clone(), U256::from(START_TIMESTAMP + ONE_HOUR))
            .expect("Event creation failed");

        let event = context.registry.event_info(index).expect("Get event failed");
        assert_eq!(event.name, long_name);
        assert_eq!(event.name.len(), 256);
    }

    #[test]
    fn test_create_event_rejects_attached_value() {
        let mut context = TestContext::new();
        let ctx = context.paid(context.organizer(), milli_ether(50));

        let result = context
            .registry
            .create_event(&ctx, "Paid".to_string(), U256::from(START_TIMESTAMP + ONE_HOUR));

        assert_eq!(result, Err(EventCreatorError::NonPayable));
        assert_eq!(context.registry.event_count(), U256::ZERO);
    }

    #[test]
    fn test_open_registration_when_already_open_fails() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        let ctx = context.ctx(context.organizer());

        expect_error(
            context.registry.open_registration(&ctx, event_index),
            "Registration is already open.",
        );
    }

    #[test]
    fn test_open_and_close_registration() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        let ctx = context.ctx(context.organizer());

        context
            .registry
            .close_registration(&ctx, event_index)
            .expect("Close registration failed");
        let event = context.registry.event_info(event_index).expect("Get event failed");
        assert!(!event.isOpen);

        context
            .registry
            .open_registration(&ctx, event_index)
            .expect("Open registration failed");
        let event = context.registry.event_info(event_index).expect("Get event failed");
        assert!(event.isOpen);

        let logs = context.registry.host().logs();
        assert_eq!(
            logs[1],
            RegistryLog::RegistrationClosed(RegistrationClosed {
                event_index,
                caller: context.organizer(),
            })
        );
        assert_eq!(
            logs[2],
            RegistryLog::RegistrationOpened(RegistrationOpened {
                event_index,
                caller: context.organizer(),
            })
        );
    }

    #[test]
    fn test_close_registration_when_already_closed_fails() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        context.close(event_index);

        let ctx = context.ctx(context.organizer());
        assert_eq!(
            context.registry.close_registration(&ctx, event_index),
            Err(EventCreatorError::AlreadyClosed)
        );
    }

    #[test]
    fn test_open_and_close_are_not_organizer_restricted() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        let ctx = context.ctx(context.participant(4));

        context
            .registry
            .close_registration(&ctx, event_index)
            .expect("Close by non-organizer failed");
        context
            .registry
            .open_registration(&ctx, event_index)
            .expect("Open by non-organizer failed");
    }

    #[test]
    fn test_reopen_after_deadline_fails() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        context.close(event_index);

        context.advance_time(ONE_HOUR);
        let ctx = context.ctx(context.organizer());

        assert_eq!(
            context.registry.open_registration(&ctx, event_index),
            Err(EventCreatorError::DeadlinePassed)
        );
        let event = context.registry.event_info(event_index).expect("Get event failed");
        assert!(!event.isOpen);
    }

    #[test]
    fn test_reopen_when_max_participants_reached_fails() {
        let mut context = TestContext::new();
        let event_index = context.create_test_event();
        context.fill_event(event_index, 10);

        let ctx = context.ctx(context.organizer());
        expect_error(
            context.registry.open_registration(&ctx, event_index),
            "Cannot reopen: Max participants reached.",
        );
    }

    #[test]
    fn test_unknown_event_index_fails() {
        let mut context = TestContext::new();
        context.create_test_event();
        let ctx = context.ctx(context.organizer());
        let missing = U256::from(7);

        assert_eq!(
            context.registry.open_registration(&ctx, missing),
            Err(EventCreatorError::EventNotFound)
        );
        assert_eq!(
            context.registry.close_registration(&ctx, missing),
            Err(EventCreatorError::EventNotFound)
        );
        assert_eq!(
            context.registry.withdraw(&ctx, missing),
            Err(EventCreatorError::EventNotFound)
        );
        assert_eq!(
            context.registry.get_participants(missing),
            Err(EventCreatorError::EventNotFound)
        );
        assert_eq!(
            context.registry.event_info(U256::MAX).map(|event| event.name),
            Err(EventCreatorError::EventNotFound)
        );
    }
}
