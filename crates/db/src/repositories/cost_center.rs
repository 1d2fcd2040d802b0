//! Cost center repository.

use async_trait::async_trait;
use fleetfin_core::financial::{CostCenter, CostCenterDirectory, FinancialError};
use fleetfin_shared::types::CostCenterId;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::storage_error;
use crate::entities::cost_centers;

/// Cost center repository backed by the `cost_centers` table.
#[derive(Debug, Clone)]
pub struct CostCenterRepository {
    db: DatabaseConnection,
}

impl CostCenterRepository {
    /// Creates a new cost center repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CostCenterDirectory for CostCenterRepository {
    /// Deleted cost centers are still returned so historical transactions keep their label.
    async fn find_by_ids(&self, ids: &[CostCenterId]) -> Result<Vec<CostCenter>, FinancialError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let uuids = ids.iter().copied().map(CostCenterId::into_inner);

        let models = cost_centers::Entity::find()
            .filter(cost_centers::Column::Id.is_in(uuids))
            .all(&self.db)
            .await
            .map_err(storage_error("find_cost_centers"))?;

        Ok(models
            .into_iter()
            .map(|m| CostCenter {
                id: CostCenterId::from_uuid(m.id),
                code: m.code,
                name: m.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_by_ids_maps_models() {
        let id = uuid::Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![cost_centers::Model {
                id,
                code: "CC1".to_string(),
                name: "Oficina".to_string(),
                created_at: now,
                updated_at: now,
                deleted_at: Some(now),
            }]])
            .into_connection();
        let repo = CostCenterRepository::new(db);

        let found = repo
            .find_by_ids(&[CostCenterId::from_uuid(id), CostCenterId::new()])
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.into_inner(), id);
        assert_eq!(found[0].label(), "CC1 - Oficina");
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_query_for_empty_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = CostCenterRepository::new(db.clone());

        let found = repo.find_by_ids(&[]).await.unwrap();

        assert!(found.is_empty());
        assert!(db.into_transaction_log().is_empty());
    }
}
