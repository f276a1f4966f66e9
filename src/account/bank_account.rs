use crate::{
    account::error::AccountError,
    types::{AccountNumber, Amount},
};
use rust_decimal::Decimal;

/// A single account that is either open or closed.
///
/// Every check runs before the balance is touched, so a rejected operation
/// leaves the account exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    account_number: AccountNumber,
    balance: Amount,
    active: bool,
}

impl BankAccount {
    /// The initial balance is taken as given, negative values included.
    pub fn new(account_number: impl Into<AccountNumber>, initial_balance: Amount) -> Self {
        Self {
            account_number: account_number.into(),
            balance: initial_balance,
            active: true,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        if !self.active {
            return Err(AccountError::InvalidOperation);
        }

        if amount < Decimal::ZERO {
            return Err(AccountError::NegativeAmount);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(())
    }

    /// Only the overdraft rule applies here: a negative amount passes the check
    /// and ends up crediting the account.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        if !self.active {
            return Err(AccountError::InvalidOperation);
        }

        if amount > self.balance {
            return Err(AccountError::Overdraft);
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        Ok(())
    }

    pub fn close(&mut self) {
        self.active = false;
    }
}
