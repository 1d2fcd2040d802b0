//! Collaborator traits implemented by the persistence layer.

use async_trait::async_trait;
use fleetfin_shared::types::{BranchId, CostCenterId};
use rust_decimal::Decimal;

use super::error::FinancialError;
use super::types::{Branch, CostCenter, CostCenterSum, LedgerFilter, OriginSum};

#[cfg(test)]
use mockall::automock;

/// Financial transaction store queried by date range, branch, type and grouping dimension.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Sums `amount` over matching transactions; `None` when nothing matched.
    async fn sum(&self, filter: &LedgerFilter) -> Result<Option<Decimal>, FinancialError>;

    /// Sums `amount` grouped by origin tag.
    async fn group_sum_by_origin(
        &self,
        filter: &LedgerFilter,
    ) -> Result<Vec<OriginSum>, FinancialError>;

    /// Sums `amount` grouped by cost center.
    async fn group_sum_by_cost_center(
        &self,
        filter: &LedgerFilter,
    ) -> Result<Vec<CostCenterSum>, FinancialError>;
}

/// Lookup of branches that are not soft-deleted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BranchDirectory: Send + Sync {
    /// Returns the branch if it exists and is not deleted.
    async fn find_active_branch(&self, id: BranchId) -> Result<Option<Branch>, FinancialError>;
}

/// Batch lookup of cost centers for label rendering.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CostCenterDirectory: Send + Sync {
    /// Returns the cost centers found among `ids`; unknown IDs are simply absent.
    async fn find_by_ids(&self, ids: &[CostCenterId]) -> Result<Vec<CostCenter>, FinancialError>;
}
