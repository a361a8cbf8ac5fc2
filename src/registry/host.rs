use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, U256};

use crate::types::{
    errors::{EventCreatorError, Result},
    events::RegistryLog,
};

/// Side effects the registry needs from the chain it runs on.
pub trait Host {
    /// Takes custody of the value attached to a payable call.
    fn collect(&mut self, from: Address, amount: U256) -> Result<()>;

    /// Sends `amount` from the registry to `to`.
    fn transfer(&mut self, to: Address, amount: U256) -> Result<()>;

    fn log(&mut self, log: RegistryLog);
}

impl<T: Host + ?Sized> Host for &mut T {
    fn collect(&mut self, from: Address, amount: U256) -> Result<()> {
        (**self).collect(from, amount)
    }

    fn transfer(&mut self, to: Address, amount: U256) -> Result<()> {
        (**self).transfer(to, amount)
    }

    fn log(&mut self, log: RegistryLog) {
        (**self).log(log)
    }
}

/// Off-chain ledger: account balances, the registry's own balance and a log journal.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    wallets: HashMap<Address, U256>,
    contract_balance: U256,
    logs: Vec<RegistryLog>,
    rejecting: HashSet<Address>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, account: Address, amount: U256) {
        let balance = self.balance_of(account);
        self.wallets.insert(account, balance.saturating_add(amount));
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.wallets.get(&account).copied().unwrap_or_default()
    }

    pub fn contract_balance(&self) -> U256 {
        self.contract_balance
    }

    pub fn logs(&self) -> &[RegistryLog] {
        &self.logs
    }

    pub fn take_logs(&mut self) -> Vec<RegistryLog> {
        std::mem::take(&mut self.logs)
    }

    /// Makes every later transfer to `account` revert, like a contract without `receive`.
    pub fn reject_transfers_to(&mut self, account: Address) {
        self.rejecting.insert(account);
    }
}

impl Host for MemoryHost {
    fn collect(&mut self, from: Address, amount: U256) -> Result<()> {
        let balance = self.balance_of(from);
        let held = self.contract_balance.checked_add(amount);
        let Some(held) = held.filter(|_| balance >= amount) else {
            return Err(EventCreatorError::TransferFailed);
        };
        self.wallets.insert(from, balance - amount);
        self.contract_balance = held;
        Ok(())
    }

    fn transfer(&mut self, to: Address, amount: U256) -> Result<()> {
        if self.rejecting.contains(&to) || self.contract_balance < amount {
            return Err(EventCreatorError::TransferFailed);
        }
        self.contract_balance -= amount;
        self.fund(to, amount);
        Ok(())
    }

    fn log(&mut self, log: RegistryLog) {
        self.logs.push(log);
    }
}
