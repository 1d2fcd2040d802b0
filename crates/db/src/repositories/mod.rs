//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each one implements a collaborator trait of `fleetfin_core::financial`.

pub mod branch;
pub mod cost_center;
pub mod financial_transaction;

pub use branch::BranchRepository;
pub use cost_center::CostCenterRepository;
pub use financial_transaction::FinancialTransactionRepository;

use fleetfin_core::financial::FinancialError;
use sea_orm::DbErr;
use tracing::error;

/// Logs a database failure and converts it for the core.
fn storage_error(operation: &'static str) -> impl FnOnce(DbErr) -> FinancialError {
    move |err| {
        error!(error = %err, operation, "Database query failed");
        FinancialError::Storage(err.to_string())
    }
}
