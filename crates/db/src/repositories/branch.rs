//! Branch repository.

use async_trait::async_trait;
use fleetfin_core::financial::{Branch, BranchDirectory, FinancialError};
use fleetfin_shared::types::BranchId;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::storage_error;
use crate::entities::branches;

/// Branch repository backed by the `branches` table.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    db: DatabaseConnection,
}

impl BranchRepository {
    /// Creates a new branch repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BranchDirectory for BranchRepository {
    async fn find_active_branch(&self, id: BranchId) -> Result<Option<Branch>, FinancialError> {
        let branch = branches::Entity::find_by_id(id.into_inner())
            .filter(branches::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(storage_error("find_active_branch"))?;

        Ok(branch.map(|b| Branch {
            id: BranchId::from_uuid(b.id),
            name: b.name,
        }))
    }
}
