pub mod error;

use std::fmt::Write;

use rust_decimal::dec;

use crate::account::bank_account::BankAccount;
use crate::operation::{Operation, OperationKind};
use crate::teller::error::TellerError;

/// Drives a single owned account through a script of operations.
pub struct Teller {
    account: BankAccount,
}

impl Teller {
    pub fn new(account: BankAccount) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    /// Deposit 1000, withdraw 500, attempt a negative deposit, close, then
    /// attempt a withdrawal on the closed account.
    pub fn demonstration() -> Vec<Operation> {
        vec![
            Operation::deposit(dec!(1000)),
            Operation::withdraw(dec!(500)),
            Operation::deposit(dec!(-100)),
            Operation::close(),
            Operation::withdraw(dec!(100)),
        ]
    }

    pub fn handle_operation(&mut self, operation: Operation) -> Result<(), TellerError> {
        let result = match (operation.kind, operation.amount) {
            (OperationKind::Deposit, Some(amount)) => {
                self.account.deposit(amount).map_err(TellerError::from)
            }
            (OperationKind::Withdraw, Some(amount)) => {
                self.account.withdraw(amount).map_err(TellerError::from)
            }
            (OperationKind::Close, _) => {
                self.account.close();
                Ok(())
            }
            (kind, None) => Err(TellerError::MissingAmount(kind)),
        };

        match &result {
            Ok(_) => tracing::info!(
                account = self.account.account_number(),
                operation = %operation.kind,
                amount = ?operation.amount,
                balance = %self.account.balance(),
                "operation applied"
            ),
            Err(err) => tracing::warn!(
                account = self.account.account_number(),
                operation = %operation.kind,
                amount = ?operation.amount,
                balance = %self.account.balance(),
                "operation rejected: {}",
                err
            ),
        }
        result
    }

    /// Applies every operation in order. A failure does not stop the run; the
    /// errors are returned in the order they happened.
    ///
    /// `on_step` sees each operation together with its outcome, right after it
    /// was applied.
    pub fn run<I, F>(&mut self, operations: I, mut on_step: F) -> Vec<TellerError>
    where
        I: IntoIterator<Item = Operation>,
        F: FnMut(&Operation, Option<&TellerError>),
    {
        let mut errors = Vec::new();
        for operation in operations {
            match self.handle_operation(operation.clone()) {
                Ok(()) => on_step(&operation, None),
                Err(err) => {
                    on_step(&operation, Some(&err));
                    errors.push(err);
                }
            }
        }
        errors
    }

    pub fn write_state(&self) -> Result<String, TellerError> {
        let mut buffer = String::new();
        writeln!(&mut buffer, "account,balance,active").map_err(|_| TellerError::WriteBuffer)?;
        writeln!(
            &mut buffer,
            "{},{},{}",
            self.account.account_number(),
            self.account.balance(),
            self.account.is_active()
        )
        .map_err(|_| TellerError::WriteBuffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
pub mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::account::error::AccountError;

    #[test]
    fn handle_operation() {
        let mut teller = Teller::new(BankAccount::new("123456", dec!(10)));

        assert!(teller.handle_operation(Operation::deposit(dec!(5))).is_ok());
        assert!(teller.handle_operation(Operation::withdraw(dec!(3))).is_ok());
        assert_eq!(teller.account().balance(), dec!(12));

        assert!(teller.handle_operation(Operation::close()).is_ok());
        assert!(!teller.account().is_active());
        assert!(teller.handle_operation(Operation::close()).is_ok());
    }

    #[test]
    fn handle_operation_errors() {
        let mut teller = Teller::new(BankAccount::new("123456", dec!(100)));

        assert_eq!(
            teller
                .handle_operation(Operation::withdraw(dec!(150)))
                .unwrap_err(),
            TellerError::Account(AccountError::Overdraft)
        );
        assert_eq!(
            teller
                .handle_operation(Operation::deposit(dec!(-1)))
                .unwrap_err(),
            TellerError::Account(AccountError::NegativeAmount)
        );
        assert_eq!(teller.account().balance(), dec!(100));
    }

    #[test]
    fn handle_operation_missing_amount() {
        let mut teller = Teller::new(BankAccount::new("123456", dec!(100)));

        for kind in [OperationKind::Deposit, OperationKind::Withdraw] {
            assert_eq!(
                teller
                    .handle_operation(Operation { kind, amount: None })
                    .unwrap_err(),
                TellerError::MissingAmount(kind)
            );
        }
        assert_eq!(teller.account().balance(), dec!(100));
        assert!(teller.account().is_active());
    }

    #[test]
    fn run_demonstration() {
        let mut teller = Teller::new(BankAccount::new("123456", Decimal::ZERO));

        let mut steps = Vec::new();
        let errors = teller.run(Teller::demonstration(), |operation, err| {
            steps.push((operation.kind, err.cloned()))
        });

        assert_eq!(
            errors,
            vec![
                TellerError::Account(AccountError::NegativeAmount),
                TellerError::Account(AccountError::InvalidOperation),
            ]
        );
        assert_eq!(teller.account().balance(), dec!(500));
        assert!(!teller.account().is_active());

        assert_eq!(
            steps,
            vec![
                (OperationKind::Deposit, None),
                (OperationKind::Withdraw, None),
                (
                    OperationKind::Deposit,
                    Some(TellerError::Account(AccountError::NegativeAmount))
                ),
                (OperationKind::Close, None),
                (
                    OperationKind::Withdraw,
                    Some(TellerError::Account(AccountError::InvalidOperation))
                ),
            ]
        );
    }

    #[test]
    fn run_continues_after_missing_amount() {
        let mut teller = Teller::new(BankAccount::new("123456", dec!(10)));

        let errors = teller.run(
            vec![
                Operation {
                    kind: OperationKind::Withdraw,
                    amount: None,
                },
                Operation::deposit(dec!(5)),
            ],
            |_, _| {},
        );

        assert_eq!(
            errors,
            vec![TellerError::MissingAmount(OperationKind::Withdraw)]
        );
        assert_eq!(teller.account().balance(), dec!(15));
    }

    #[test]
    fn write_state() {
        let mut teller = Teller::new(BankAccount::new("123456", Decimal::ZERO));
        teller.run(Teller::demonstration(), |_, _| {});

        let mut expected_output = String::new();
        writeln!(&mut expected_output, "account,balance,active").unwrap();
        writeln!(&mut expected_output, "123456,500,false").unwrap();

        assert_eq!(teller.write_state().unwrap(), expected_output);
    }

    #[test]
    fn write_state_open_account() {
        let teller = Teller::new(BankAccount::new("987", dec!(12.5)));

        assert_eq!(
            teller.write_state().unwrap(),
            "account,balance,active\n987,12.5,true\n"
        );
    }

    #[test]
    fn write_state_keeps_full_precision() {
        let teller = Teller::new(BankAccount::new("987", dec!(12.345)));

        assert_eq!(
            teller.write_state().unwrap(),
            "account,balance,active\n987,12.345,true\n"
        );
    }
}
