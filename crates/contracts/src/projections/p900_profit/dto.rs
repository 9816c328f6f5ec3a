use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId};

pub const RESOURCE: &str = "/api/profits";
/// The profit report opens with a smaller page than other lists.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitRow {
    pub id: EntityId,
    #[serde(default)]
    pub product_id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_default")]
    pub product_name: String,
    #[serde(default)]
    pub sale_invoice: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub sale_amount: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub purchase_amount: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub other_expenses: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub gross_profit: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub net_profit: f64,
    #[serde(default)]
    pub profit_date: Option<String>,
}

impl ProfitRow {
    pub fn is_loss(&self) -> bool {
        self.net_profit < 0.0
    }
}

/// Sums over the rows currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfitTotals {
    pub sale_amount: f64,
    pub purchase_amount: f64,
    pub other_expenses: f64,
    pub gross_profit: f64,
    pub net_profit: f64,
}

impl ProfitTotals {
    pub fn of(rows: &[ProfitRow]) -> Self {
        rows.iter().fold(Self::default(), |mut t, r| {
            t.sale_amount += r.sale_amount;
            t.purchase_amount += r.purchase_amount;
            t.other_expenses += r.other_expenses;
            t.gross_profit += r.gross_profit;
            t.net_profit += r.net_profit;
            t
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_totals() {
        let rows: Vec<ProfitRow> = serde_json::from_str(
            r#"[
                {"id":1,"productName":"Rod","saleAmount":500,"purchaseAmount":300,"otherExpenses":20,"grossProfit":200,"netProfit":180},
                {"id":2,"productName":"Pipe","saleAmount":100,"purchaseAmount":150,"otherExpenses":0,"grossProfit":-50,"netProfit":-50}
            ]"#,
        )
        .unwrap();
        let totals = ProfitTotals::of(&rows);
        assert_eq!(totals.net_profit, 130.0);
        assert!(rows[1].is_loss());
    }
}
