//! Financial data types.

use fleetfin_shared::types::{BranchId, CostCenterId};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::period::PeriodWindow;

/// Direction of a financial transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// Active branch as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch ID.
    pub id: BranchId,
    /// Branch name.
    pub name: String,
}

/// Cost center reference used for label rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    /// Cost center ID.
    pub id: CostCenterId,
    /// Cost center code.
    pub code: String,
    /// Cost center name.
    pub name: String,
}

impl CostCenter {
    /// Display label in `"{code} - {name}"` form.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// Ledger query restriction shared by every aggregate of a period result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerFilter {
    /// Branch whose transactions are aggregated.
    pub branch_id: BranchId,
    /// Inclusive transaction date window.
    pub window: PeriodWindow,
    /// Transaction direction.
    pub transaction_type: TransactionType,
    /// Optional single cost center restriction.
    pub cost_center_id: Option<CostCenterId>,
}

/// Sum of amounts for one origin tag (`None` = untagged).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginSum {
    /// Origin tag.
    pub origin_type: Option<String>,
    /// Summed amount.
    pub amount: Decimal,
}

/// Sum of amounts for one cost center (`None` = no cost center).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCenterSum {
    /// Cost center.
    pub cost_center_id: Option<CostCenterId>,
    /// Summed amount.
    pub amount: Decimal,
}

/// Input of a period result computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    /// Branch ID.
    pub branch_id: BranchId,
    /// Month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Restrict every aggregate to this cost center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center_id: Option<CostCenterId>,
}

/// Grouping key of a breakdown item.
///
/// Serialized as the grouping value itself, or as the literal `"NULL"` when
/// the transactions carry no value for the grouped dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakdownKey {
    /// No origin / no cost center.
    Unassigned,
    /// Origin tag or cost center ID.
    Value(String),
}

impl BreakdownKey {
    /// Wire representation of [`BreakdownKey::Unassigned`].
    pub const UNASSIGNED: &'static str = "NULL";

    /// Returns the wire representation of this key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unassigned => Self::UNASSIGNED,
            Self::Value(value) => value,
        }
    }
}

impl<T: Into<String>> From<Option<T>> for BreakdownKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unassigned, |v| Self::Value(v.into()))
    }
}

impl Serialize for BreakdownKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BreakdownKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == Self::UNASSIGNED {
            Self::Unassigned
        } else {
            Self::Value(raw)
        })
    }
}

/// One slice of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Grouping key.
    pub key: BreakdownKey,
    /// Human-readable label.
    pub label: String,
    /// Amount (gross for origins, net for cost centers).
    pub amount: Decimal,
}

/// Financial result of a branch for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    /// Branch ID.
    pub branch_id: BranchId,
    /// Month (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Cost center filter, when one was applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center_id: Option<CostCenterId>,
    /// Sum of income.
    pub total_income: Decimal,
    /// Sum of expense.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub result: Decimal,
    /// Income grouped by origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_by_origin: Option<Vec<BreakdownItem>>,
    /// Expense grouped by origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_by_origin: Option<Vec<BreakdownItem>>,
    /// Net (income minus expense) grouped by cost center, zero nets omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_cost_center: Option<Vec<BreakdownItem>>,
}
