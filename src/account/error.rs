use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Negative deposit attempt")]
    NegativeAmount,

    #[error("Withdrawal amount exceeds current balance")]
    Overdraft,

    #[error("Invalid operation on a closed account")]
    InvalidOperation,

    #[error("Resulting balance is out of range")]
    BalanceOverflow,
}

impl AccountError {
    /// Short name used when the driver reports a caught error.
    pub fn kind(&self) -> &'static str {
        match self {
            AccountError::NegativeAmount => "NegativeDepositException",
            AccountError::Overdraft => "OverdrawException",
            AccountError::InvalidOperation => "InvalidAccountOperationException",
            AccountError::BalanceOverflow => "BalanceOverflowException",
        }
    }
}
