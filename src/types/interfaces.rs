use alloy_sol_types::sol;

sol! {
    /// Public ABI of the deployed `EventCreator`.
    interface IEventCreator {
        #[derive(Debug, PartialEq, Eq)]
        struct EventInfo {
            address organizer;
            string name;
            uint256 deadline;
            bool isOpen;
            uint256 maxParticipants;
            uint256 registrationFee;
            uint256 balance;
            uint256 participantCount;
        }

        function createEvent(string name, uint256 deadline) external returns (uint256);
        function openRegistration(uint256 eventIndex) external;
        function closeRegistration(uint256 eventIndex) external;
        function register(uint256 eventIndex) external payable;
        function withdraw(uint256 eventIndex) external;
        function getParticipants(uint256 eventIndex) external view returns (address[] memory);
        function events(uint256 eventIndex)
            external
            view
            returns (
                address organizer,
                string memory name,
                uint256 deadline,
                bool isOpen,
                uint256 maxParticipants,
                uint256 registrationFee,
                uint256 balance,
                uint256 participantCount
            );
        function eventCount() external view returns (uint256);
    }
}
