//! Leg types — a leg is one priced, single-direction route segment.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Leg classification.
///
/// Import and export legs carry freight revenue and are paid at
/// class-specific per-km wage rates; empty legs are non-revenue
/// repositioning paid at a fixed wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegType {
    Import,
    Export,
    Empty,
}

impl LegType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LegType::Import => "IMPORT",
            LegType::Export => "EXPORT",
            LegType::Empty => "EMPTY",
        }
    }

    /// Whether this leg class carries freight revenue.
    pub const fn is_revenue(self) -> bool {
        !matches!(self, LegType::Empty)
    }
}

impl fmt::Display for LegType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IMPORT" => Ok(LegType::Import),
            "EXPORT" => Ok(LegType::Export),
            "EMPTY" => Ok(LegType::Empty),
            other => Err(EngineError::InvalidLegType(other.to_string())),
        }
    }
}

/// Currency of a monetary input field.
///
/// `Local` is the home currency of the deployment; every derived amount on a
/// [`ComputedLeg`] is expressed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Local,
    Usd,
}

impl Currency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Currency::Local => "LOCAL",
            Currency::Usd => "USD",
        }
    }
}

/// Crew configuration for a leg. Team mode doubles wage and bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    SingleOperator,
    Team,
}

impl TravelMode {
    /// Payroll multiplier applied to wage and bonus.
    pub const fn crew_factor(self) -> f64 {
        match self {
            TravelMode::SingleOperator => 1.0,
            TravelMode::Team => 2.0,
        }
    }
}

/// The fixed set of per-leg ancillary charges, all in the local currency.
///
/// Every field is absent-means-zero: the capture form leaves most of them
/// blank on a typical leg. Toll fees are deliberately NOT here — they enter
/// the cost total as their own term, never through the ancillary subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AncillaryCharges {
    pub local_movement: f64,
    pub punctuality: f64,
    pub demurrage: f64,
    pub storage: f64,
    pub reefer_bond: f64,
    pub reefer_rental: f64,
    pub reefer_wash: f64,
    pub extra_lanes: f64,
    pub stop_fee: f64,
    pub false_call: f64,
    pub jacks: f64,
    pub accessories: f64,
    pub guide_fees: f64,
}

impl AncillaryCharges {
    /// Sum of every ancillary field.
    pub fn total(&self) -> f64 {
        self.local_movement
            + self.punctuality
            + self.demurrage
            + self.storage
            + self.reefer_bond
            + self.reefer_rental
            + self.reefer_wash
            + self.extra_lanes
            + self.stop_fee
            + self.false_call
            + self.jacks
            + self.accessories
            + self.guide_fees
    }
}

/// Raw capture-form inputs for one leg, before costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegInput {
    pub date: NaiveDate,
    pub leg_type: LegType,
    /// Absent for empty legs.
    pub client: Option<String>,
    pub origin: String,
    pub destination: String,
    pub travel_mode: TravelMode,
    #[serde(default)]
    pub distance_km: f64,
    pub revenue_currency: Currency,
    /// Freight revenue in `revenue_currency`.
    #[serde(default)]
    pub freight_revenue: f64,
    pub crossing_revenue_currency: Currency,
    /// Border-crossing revenue in `crossing_revenue_currency`.
    #[serde(default)]
    pub crossing_revenue: f64,
    pub crossing_cost_currency: Currency,
    /// Border-crossing cost in `crossing_cost_currency`.
    #[serde(default)]
    pub crossing_cost: f64,
    /// Hours the refrigeration unit runs on this leg.
    #[serde(default)]
    pub reefer_hours: f64,
    /// Toll fees, local currency. Costed separately from ancillaries.
    #[serde(default)]
    pub toll_fees: f64,
    #[serde(default)]
    pub ancillary: AncillaryCharges,
    /// When true, the ancillary total is billed on top of freight revenue.
    #[serde(default)]
    pub ancillary_charged_to_client: bool,
}

/// A fully costed leg: the capture inputs plus every derived amount, all
/// derived amounts in the local currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedLeg {
    /// Catalog identifier (`IG######`). `None` until the catalog store
    /// assigns one at insertion.
    pub id: Option<String>,
    pub date: NaiveDate,
    pub leg_type: LegType,
    pub client: Option<String>,
    pub origin: String,
    pub destination: String,
    pub travel_mode: TravelMode,
    pub distance_km: f64,

    pub revenue_currency: Currency,
    pub freight_revenue: f64,
    /// Exchange rate applied to the freight revenue.
    pub freight_exchange_rate: f64,
    pub converted_freight_revenue: f64,

    pub crossing_revenue_currency: Currency,
    pub crossing_revenue: f64,
    pub crossing_exchange_rate: f64,
    pub converted_crossing_revenue: f64,

    pub crossing_cost_currency: Currency,
    pub crossing_cost: f64,
    pub crossing_cost_exchange_rate: f64,
    pub converted_crossing_cost: f64,

    pub total_revenue: f64,

    pub fuel_cost_tractor: f64,
    pub fuel_cost_reefer: f64,
    /// Per-km wage rate resolved for this leg class (0 for empty legs).
    pub per_km_rate: f64,
    pub wage: f64,
    pub bonus: f64,
    pub reefer_hours: f64,
    pub toll_fees: f64,
    pub ancillary: AncillaryCharges,
    pub ancillary_total: f64,
    pub ancillary_charged_to_client: bool,
    pub total_cost: f64,
}

impl ComputedLeg {
    /// Client label for display; empty legs have none.
    pub fn client_label(&self) -> &str {
        self.client.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leg_type_from_str() {
        assert_eq!("IMPORT".parse::<LegType>().unwrap(), LegType::Import);
        assert_eq!("export".parse::<LegType>().unwrap(), LegType::Export);
        assert_eq!(" Empty ".parse::<LegType>().unwrap(), LegType::Empty);
    }

    #[test]
    fn test_leg_type_from_str_rejects_unknown() {
        let err = "TRANSFER".parse::<LegType>().unwrap_err();
        assert_eq!(err, EngineError::InvalidLegType("TRANSFER".to_string()));
    }

    #[test]
    fn test_revenue_classification() {
        assert!(LegType::Import.is_revenue());
        assert!(LegType::Export.is_revenue());
        assert!(!LegType::Empty.is_revenue());
    }

    #[test]
    fn test_ancillary_total_sums_all_fields() {
        let charges = AncillaryCharges {
            local_movement: 1.0,
            punctuality: 2.0,
            demurrage: 3.0,
            storage: 4.0,
            reefer_bond: 5.0,
            reefer_rental: 6.0,
            reefer_wash: 7.0,
            extra_lanes: 8.0,
            stop_fee: 9.0,
            false_call: 10.0,
            jacks: 11.0,
            accessories: 12.0,
            guide_fees: 13.0,
        };
        assert_eq!(charges.total(), 91.0);
    }

    #[test]
    fn test_ancillary_default_is_zero() {
        assert_eq!(AncillaryCharges::default().total(), 0.0);
    }

    #[test]
    fn test_crew_factor() {
        assert_eq!(TravelMode::SingleOperator.crew_factor(), 1.0);
        assert_eq!(TravelMode::Team.crew_factor(), 2.0);
    }
}
