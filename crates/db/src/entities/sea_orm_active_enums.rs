//! `SeaORM` active enums.

use fleetfin_core::financial::TransactionType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "financial_transaction_type"
)]
pub enum FinancialTransactionType {
    #[sea_orm(string_value = "INCOME")]
    Income,
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

impl From<TransactionType> for FinancialTransactionType {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Income => Self::Income,
            TransactionType::Expense => Self::Expense,
        }
    }
}

impl From<FinancialTransactionType> for TransactionType {
    fn from(value: FinancialTransactionType) -> Self {
        match value {
            FinancialTransactionType::Income => Self::Income,
            FinancialTransactionType::Expense => Self::Expense,
        }
    }
}
