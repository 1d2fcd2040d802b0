//! Financial transaction repository.
//!
//! Aggregates are computed in the database; only sums and group keys are
//! transferred, never individual transactions.

use async_trait::async_trait;
use fleetfin_core::financial::{CostCenterSum, FinancialError, Ledger, LedgerFilter, OriginSum};
use fleetfin_shared::types::CostCenterId;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use uuid::Uuid;

use super::storage_error;
use crate::entities::financial_transactions::{self, Column};
use crate::entities::sea_orm_active_enums::FinancialTransactionType;

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    total: Option<Decimal>,
}

#[derive(Debug, FromQueryResult)]
struct OriginTotalRow {
    origin_type: Option<String>,
    total: Decimal,
}

#[derive(Debug, FromQueryResult)]
struct CostCenterTotalRow {
    cost_center_id: Option<Uuid>,
    total: Decimal,
}

/// Ledger backed by the `financial_transactions` table.
#[derive(Debug, Clone)]
pub struct FinancialTransactionRepository {
    db: DatabaseConnection,
}

impl FinancialTransactionRepository {
    /// Creates a new financial transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Transactions of the filter's branch, type and window, optionally narrowed to one cost center.
    fn filtered(filter: &LedgerFilter) -> Select<financial_transactions::Entity> {
        let mut query = financial_transactions::Entity::find()
            .filter(Column::BranchId.eq(filter.branch_id.into_inner()))
            .filter(Column::TransactionDate.between(
                filter.window.start.fixed_offset(),
                filter.window.end.fixed_offset(),
            ))
            .filter(Column::TransactionType.eq(FinancialTransactionType::from(
                filter.transaction_type,
            )));

        if let Some(cost_center_id) = filter.cost_center_id {
            query = query.filter(Column::CostCenterId.eq(cost_center_id.into_inner()));
        }

        query
    }
}

#[async_trait]
impl Ledger for FinancialTransactionRepository {
    async fn sum(&self, filter: &LedgerFilter) -> Result<Option<Decimal>, FinancialError> {
        let row = Self::filtered(filter)
            .select_only()
            .column_as(Expr::col(Column::Amount).sum(), "total")
            .into_model::<TotalRow>()
            .one(&self.db)
            .await
            .map_err(storage_error("sum_transactions"))?;

        Ok(row.and_then(|r| r.total))
    }

    async fn group_sum_by_origin(
        &self,
        filter: &LedgerFilter,
    ) -> Result<Vec<OriginSum>, FinancialError> {
        let rows = Self::filtered(filter)
            .select_only()
            .column(Column::OriginType)
            .column_as(Expr::col(Column::Amount).sum(), "total")
            .group_by(Column::OriginType)
            .order_by_asc(Column::OriginType)
            .into_model::<OriginTotalRow>()
            .all(&self.db)
            .await
            .map_err(storage_error("sum_transactions_by_origin"))?;

        Ok(rows
            .into_iter()
            .map(|r| OriginSum {
                origin_type: r.origin_type,
                amount: r.total,
            })
            .collect())
    }

    async fn group_sum_by_cost_center(
        &self,
        filter: &LedgerFilter,
    ) -> Result<Vec<CostCenterSum>, FinancialError> {
        let rows = Self::filtered(filter)
            .select_only()
            .column(Column::CostCenterId)
            .column_as(Expr::col(Column::Amount).sum(), "total")
            .group_by(Column::CostCenterId)
            .order_by_asc(Column::CostCenterId)
            .into_model::<CostCenterTotalRow>()
            .all(&self.db)
            .await
            .map_err(storage_error("sum_transactions_by_cost_center"))?;

        Ok(rows
            .into_iter()
            .map(|r| CostCenterSum {
                cost_center_id: r.cost_center_id.map(CostCenterId::from_uuid),
                amount: r.total,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "financial_transaction_tests.rs"]
mod tests;
