//! Round-trip combination and profitability types

use serde::{Deserialize, Serialize};

use super::ComputedLeg;

/// Profitability breakdown for one leg or an aggregate of legs.
///
/// All amounts are in the local currency. Percentages are guarded: an
/// aggregate with no revenue scores 0%, never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profitability {
    pub revenue: f64,
    pub cost: f64,
    pub gross_margin: f64,
    pub gross_pct: f64,
    /// Fixed-rate overlay on revenue covering indirect expenses.
    pub indirect_cost: f64,
    pub net_margin: f64,
    pub net_pct: f64,
}

/// One suggested round trip: the primary leg plus an optional empty bridge
/// and an optional return leg, with the aggregate profitability.
///
/// Ephemeral — produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCombination {
    /// 1–3 legs in travel order: primary, optional empty bridge, return.
    pub legs: Vec<ComputedLeg>,
    /// Human-readable label for selection lists and reports.
    pub description: String,
    pub profitability: Profitability,
}

impl RouteCombination {
    /// Gross percentage margin of the whole combination.
    pub fn gross_pct(&self) -> f64 {
        self.profitability.gross_pct
    }
}
