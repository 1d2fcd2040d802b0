//! Financial error types.

use fleetfin_shared::{AppError, types::BranchId};
use thiserror::Error;

/// Errors that can occur while computing a period result.
#[derive(Debug, Error)]
pub enum FinancialError {
    /// Branch does not exist or has been deleted.
    #[error("Branch not found: {0}")]
    BranchNotFound(BranchId),

    /// Month outside 1..=12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Year not representable as a calendar year.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// A collaborator (ledger, branch or cost center store) failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<FinancialError> for AppError {
    fn from(err: FinancialError) -> Self {
        match err {
            FinancialError::BranchNotFound(_) => Self::NotFound(err.to_string()),
            FinancialError::InvalidMonth(_) | FinancialError::InvalidYear(_) => {
                Self::Validation(err.to_string())
            }
            FinancialError::Storage(msg) => Self::Database(msg),
        }
    }
}
