//! Financial result by period.
//!
//! This module computes the monthly result of a branch from its ledger:
//! - Total income, total expense and net result
//! - Income and expense breakdowns by origin
//! - Net breakdown by cost center

pub mod error;
pub mod labels;
pub mod period;
pub mod ports;
pub mod service;
pub mod types;


pub use error::FinancialError;
pub use period::PeriodWindow;
pub use ports::{BranchDirectory, CostCenterDirectory, Ledger};
pub use service::PeriodResultAggregator;
pub use types::*;
