use crate::types::Amount;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum OperationKind {
    #[serde(rename = "deposit")]
    Deposit,
    #[serde(rename = "withdraw")]
    Withdraw,
    #[serde(rename = "close")]
    Close,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdraw => "withdraw",
            OperationKind::Close => "close",
        };
        f.write_str(name)
    }
}

/// One step of a script run against an account.
///
/// Amounts are kept as written, sign included; rejecting them is the account's job.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    #[serde(default)]
    pub amount: Option<Amount>,
}

impl Operation {
    pub fn deposit(amount: Amount) -> Self {
        Self {
            kind: OperationKind::Deposit,
            amount: Some(amount),
        }
    }

    pub fn withdraw(amount: Amount) -> Self {
        Self {
            kind: OperationKind::Withdraw,
            amount: Some(amount),
        }
    }

    pub fn close() -> Self {
        Self {
            kind: OperationKind::Close,
            amount: None,
        }
    }
}

/// Progress line printed before the operation's outcome is reported.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.amount) {
            (OperationKind::Deposit, Some(amount)) => write!(f, "Depositing ${}...", amount),
            (OperationKind::Withdraw, Some(amount)) => write!(f, "Withdrawing ${}...", amount),
            (OperationKind::Deposit, None) => f.write_str("Depositing..."),
            (OperationKind::Withdraw, None) => f.write_str("Withdrawing..."),
            (OperationKind::Close, _) => f.write_str("Closing account..."),
        }
    }
}

pub fn reader<R: std::io::Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .delimiter(b',')
        .flexible(true)
        .from_reader(rdr)
}

/// Reads a `type,amount` script. Rows that fail to deserialize are reported
/// and skipped; the rest keep their order.
pub fn read_operations<R: std::io::Read>(rdr: R) -> Vec<Operation> {
    let mut operations = Vec::new();
    for operation_result in reader(rdr).deserialize() {
        match operation_result {
            Ok(operation) => operations.push(operation),
            Err(err) => {
                tracing::warn!("skipping operation row: {}", err);
                eprintln!("Error deserializing operation: {}", err);
            }
        }
    }
    operations
}
