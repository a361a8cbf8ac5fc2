#[cfg(feature = "export-abi")]
fn main() {
    stylus_sdk::abi::export::print_abi::<event_creator_contracts::Contract>(
        "MIT",
        "pragma solidity ^0.8.23;",
    );
}

#[cfg(not(feature = "export-abi"))]
fn main() {
    use event_creator_contracts::RegistryConfig;

    println!("EventCreator Smart Contract");
    println!("===========================");
    println!();
    println!("Event registration with deadlines, capacity limits and exact-fee payments,");
    println!("built for Arbitrum Stylus.");
    println!();
    println!("Default registry configuration:");
    match RegistryConfig::default().to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{err}"),
    }
    println!();
    println!("Build with `--features export-abi` to print the Solidity ABI.");
}
