//! Display labels for breakdown keys.

use super::types::CostCenter;

/// Label of transactions without origin.
pub const NO_ORIGIN_LABEL: &str = "Sem origem";

/// Label of transactions without cost center.
pub const NO_COST_CENTER_LABEL: &str = "Sem centro de custo";

/// Translates an origin tag; unknown tags are shown as-is.
#[must_use]
pub fn origin_label(origin_type: Option<&str>) -> String {
    let Some(tag) = origin_type else {
        return NO_ORIGIN_LABEL.to_string();
    };

    let label = match tag {
        "MAINTENANCE" => "Manutenção",
        "STOCK" => "Estoque",
        "HR" => "Recursos Humanos",
        "MANUAL" => "Manual",
        "PURCHASE_ORDER" => "Pedido de compra",
        "SALE_ORDER" => "Pedido de venda",
        other => other,
    };
    label.to_string()
}

/// Label of a cost center, falling back to its raw ID when it could not be resolved.
#[must_use]
pub fn cost_center_label(id: &str, resolved: Option<&CostCenter>) -> String {
    resolved.map_or_else(|| id.to_string(), CostCenter::label)
}
