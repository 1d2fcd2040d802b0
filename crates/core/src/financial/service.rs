//! Period result aggregation service.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;

use chrono_tz::Tz;
use fleetfin_shared::types::CostCenterId;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::FinancialError;
use super::labels::{NO_COST_CENTER_LABEL, cost_center_label, origin_label};
use super::period::PeriodWindow;
use super::ports::{BranchDirectory, CostCenterDirectory, Ledger};
use super::types::{
    BreakdownItem, BreakdownKey, CostCenter, CostCenterSum, LedgerFilter, OriginSum, PeriodQuery,
    PeriodResult, TransactionType,
};

/// Computes the monthly financial result of a branch.
///
/// Totals always honour the optional cost center filter. Breakdowns (by
/// origin and by cost center) are only computed when no cost center filter
/// is given, and are omitted from the result when empty.
#[derive(Debug, Clone)]
pub struct PeriodResultAggregator<L, B, C> {
    ledger: L,
    branches: B,
    cost_centers: C,
    timezone: Tz,
}

impl<L, B, C> PeriodResultAggregator<L, B, C>
where
    L: Ledger,
    B: BranchDirectory,
    C: CostCenterDirectory,
{
    /// Creates an aggregator evaluating months in UTC.
    #[must_use]
    pub const fn new(ledger: L, branches: B, cost_centers: C) -> Self {
        Self {
            ledger,
            branches,
            cost_centers,
            timezone: Tz::UTC,
        }
    }

    /// Evaluates month boundaries in `timezone` instead of UTC.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Computes totals and breakdowns for `query`.
    ///
    /// Input is validated before any collaborator is called. The six ledger
    /// aggregates run concurrently; the first failure fails the whole call.
    pub async fn result_by_period(
        &self,
        query: PeriodQuery,
    ) -> Result<PeriodResult, FinancialError> {
        let window = PeriodWindow::month(query.year, query.month, self.timezone)?;

        let branch = self
            .branches
            .find_active_branch(query.branch_id)
            .await?
            .ok_or(FinancialError::BranchNotFound(query.branch_id))?;

        debug!(
            branch_id = %branch.id,
            start = %window.start,
            end = %window.end,
            cost_center_id = ?query.cost_center_id,
            "Computing period result"
        );

        let income = LedgerFilter {
            branch_id: branch.id,
            window,
            transaction_type: TransactionType::Income,
            cost_center_id: query.cost_center_id,
        };
        let expense = LedgerFilter {
            transaction_type: TransactionType::Expense,
            ..income.clone()
        };
        let with_breakdowns = query.cost_center_id.is_none();

        let (
            total_income,
            total_expense,
            income_origins,
            expense_origins,
            income_cost_centers,
            expense_cost_centers,
        ) = tokio::try_join!(
            self.ledger.sum(&income),
            self.ledger.sum(&expense),
            when(with_breakdowns, || self.ledger.group_sum_by_origin(&income)),
            when(with_breakdowns, || self.ledger.group_sum_by_origin(&expense)),
            when(with_breakdowns, || self.ledger.group_sum_by_cost_center(&income)),
            when(with_breakdowns, || self.ledger.group_sum_by_cost_center(&expense)),
        )?;

        let total_income = total_income.unwrap_or(Decimal::ZERO);
        let total_expense = total_expense.unwrap_or(Decimal::ZERO);

        let by_cost_center = match (income_cost_centers, expense_cost_centers) {
            (Some(income), Some(expense)) => {
                Some(self.cost_center_breakdown(income, expense).await?)
            }
            _ => None,
        };

        let result = PeriodResult {
            branch_id: branch.id,
            month: query.month,
            year: query.year,
            cost_center_id: query.cost_center_id,
            total_income,
            total_expense,
            result: total_income - total_expense,
            income_by_origin: non_empty(income_origins.map(origin_breakdown)),
            expense_by_origin: non_empty(expense_origins.map(origin_breakdown)),
            by_cost_center: non_empty(by_cost_center),
        };

        info!(
            branch_id = %result.branch_id,
            month = result.month,
            year = result.year,
            total_income = %result.total_income,
            total_expense = %result.total_expense,
            result = %result.result,
            "Period result computed"
        );

        Ok(result)
    }

    /// Nets income against expense per cost center and drops zero nets.
    ///
    /// Labels for every referenced cost center are resolved in a single lookup.
    async fn cost_center_breakdown(
        &self,
        income: Vec<CostCenterSum>,
        expense: Vec<CostCenterSum>,
    ) -> Result<Vec<BreakdownItem>, FinancialError> {
        let mut net: BTreeMap<Option<CostCenterId>, Decimal> = BTreeMap::new();
        for group in income {
            *net.entry(group.cost_center_id).or_default() += group.amount;
        }
        for group in expense {
            *net.entry(group.cost_center_id).or_default() -= group.amount;
        }

        let ids: Vec<CostCenterId> = net.keys().flatten().copied().collect();
        let resolved: HashMap<CostCenterId, CostCenter> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.cost_centers
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|cost_center| (cost_center.id, cost_center))
                .collect()
        };

        Ok(net
            .into_iter()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(id, amount)| match id {
                Some(id) => {
                    let key = id.to_string();
                    BreakdownItem {
                        label: cost_center_label(&key, resolved.get(&id)),
                        key: BreakdownKey::Value(key),
                        amount,
                    }
                }
                None => BreakdownItem {
                    key: BreakdownKey::Unassigned,
                    label: NO_COST_CENTER_LABEL.to_string(),
                    amount,
                },
            })
            .collect())
    }
}

/// Runs `query` only when `enabled`; the query future is never created otherwise.
async fn when<T, F, Fut>(enabled: bool, query: F) -> Result<Option<T>, FinancialError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, FinancialError>>,
{
    if enabled {
        query().await.map(Some)
    } else {
        Ok(None)
    }
}

/// Origin groups keep zero amounts; only the cost center breakdown filters them.
fn origin_breakdown(groups: Vec<OriginSum>) -> Vec<BreakdownItem> {
    groups
        .into_iter()
        .map(|group| BreakdownItem {
            label: origin_label(group.origin_type.as_deref()),
            key: BreakdownKey::from(group.origin_type),
            amount: group.amount,
        })
        .collect()
}

fn non_empty(items: Option<Vec<BreakdownItem>>) -> Option<Vec<BreakdownItem>> {
    items.filter(|items| !items.is_empty())
}
