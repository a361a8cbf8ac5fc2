use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    event EventCreated(
        uint256 indexed event_index,
        address indexed organizer,
        string name,
        uint256 deadline
    );

    #[derive(Debug, PartialEq, Eq)]
    event RegistrationOpened(
        uint256 indexed event_index,
        address indexed caller
    );

    #[derive(Debug, PartialEq, Eq)]
    event RegistrationClosed(
        uint256 indexed event_index,
        address indexed caller
    );

    #[derive(Debug, PartialEq, Eq)]
    event ParticipantRegistered(
        uint256 indexed event_index,
        address indexed participant,
        uint256 fee,
        uint256 participant_count
    );

    #[derive(Debug, PartialEq, Eq)]
    event FundsWithdrawn(
        uint256 indexed event_index,
        address indexed organizer,
        uint256 amount
    );
}

/// Everything the registry can log, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLog {
    EventCreated(EventCreated),
    RegistrationOpened(RegistrationOpened),
    RegistrationClosed(RegistrationClosed),
    ParticipantRegistered(ParticipantRegistered),
    FundsWithdrawn(FundsWithdrawn),
}

macro_rules! impl_from_log {
    ($($event:ident),*) => {
        $(
            impl From<$event> for RegistryLog {
                fn from(event: $event) -> Self {
                    RegistryLog::$event(event)
                }
            }
        )*
    };
}

impl_from_log!(
    EventCreated,
    RegistrationOpened,
    RegistrationClosed,
    ParticipantRegistered,
    FundsWithdrawn
);
