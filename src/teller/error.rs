use thiserror::Error;

use crate::{account::error::AccountError, operation::OperationKind};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TellerError {
    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Missing amount for {0} operation")]
    MissingAmount(OperationKind),

    #[error("Error writing console")]
    WriteBuffer,
}
