//! Profitability scoring
//!
//! Aggregates revenue and cost over one leg or a combination of legs and
//! derives gross/net margins. Pure function over already-costed legs.

use crate::types::{ComputedLeg, Profitability};

/// Fixed-rate overlay on revenue covering indirect expenses
/// (administration, insurance, yard overhead).
pub const INDIRECT_RATE: f64 = 0.35;

/// Score a set of legs: summed revenue and cost, gross margin, the indirect
/// overlay, net margin, and percentage margins.
///
/// Percentages are 0 when the aggregate has no revenue — an all-empty
/// combination scores 0%, never NaN.
pub fn score(legs: &[ComputedLeg]) -> Profitability {
    let revenue: f64 = legs.iter().map(|l| l.total_revenue).sum();
    let cost: f64 = legs.iter().map(|l| l.total_cost).sum();

    let gross_margin = revenue - cost;
    let indirect_cost = revenue * INDIRECT_RATE;
    let net_margin = gross_margin - indirect_cost;

    let (gross_pct, net_pct) = if revenue > 0.0 {
        (gross_margin / revenue * 100.0, net_margin / revenue * 100.0)
    } else {
        (0.0, 0.0)
    };

    Profitability {
        revenue,
        cost,
        gross_margin,
        gross_pct,
        indirect_cost,
        net_margin,
        net_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TariffConfig;
    use crate::services::calculator::compute_leg;
    use crate::types::{AncillaryCharges, Currency, LegInput, LegType, TravelMode};
    use chrono::NaiveDate;

    const EPS: f64 = 1e-9;

    fn leg(leg_type: LegType, revenue: f64, distance_km: f64) -> ComputedLeg {
        let input = LegInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            leg_type,
            client: leg_type.is_revenue().then(|| "CLIENT".to_string()),
            origin: "A".to_string(),
            destination: "B".to_string(),
            travel_mode: TravelMode::SingleOperator,
            distance_km,
            revenue_currency: Currency::Local,
            freight_revenue: revenue,
            crossing_revenue_currency: Currency::Local,
            crossing_revenue: 0.0,
            crossing_cost_currency: Currency::Local,
            crossing_cost: 0.0,
            reefer_hours: 0.0,
            toll_fees: 0.0,
            ancillary: AncillaryCharges::default(),
            ancillary_charged_to_client: false,
        };
        compute_leg(&input, &TariffConfig::default()).unwrap()
    }

    #[test]
    fn test_reference_scenario_percentages() {
        // 500 km import, 15000 revenue: cost 6312.66, gross 8687.34 ≈ 57.92%
        let p = score(&[leg(LegType::Import, 15_000.0, 500.0)]);

        assert!((p.revenue - 15_000.0).abs() < EPS);
        assert!((p.cost - 6312.66).abs() < EPS);
        assert!((p.gross_margin - 8687.34).abs() < EPS);
        assert!((p.gross_pct - 57.9156).abs() < 1e-4);
        assert!((p.indirect_cost - 5250.0).abs() < EPS);
        assert!((p.net_margin - 3437.34).abs() < EPS);
        assert!((p.net_pct - 22.9156).abs() < 1e-4);
    }

    #[test]
    fn test_zero_revenue_scores_zero_percent() {
        let p = score(&[leg(LegType::Empty, 0.0, 300.0)]);

        assert_eq!(p.revenue, 0.0);
        assert!(p.cost > 0.0);
        assert_eq!(p.gross_pct, 0.0);
        assert_eq!(p.net_pct, 0.0);
        assert!(!p.gross_pct.is_nan());
        assert!(!p.net_pct.is_nan());
    }

    #[test]
    fn test_empty_slice_scores_zero() {
        let p = score(&[]);
        assert_eq!(p.revenue, 0.0);
        assert_eq!(p.cost, 0.0);
        assert_eq!(p.gross_pct, 0.0);
    }

    #[test]
    fn test_aggregate_sums_member_totals() {
        let a = leg(LegType::Import, 15_000.0, 500.0);
        let e = leg(LegType::Empty, 0.0, 200.0);
        let b = leg(LegType::Export, 18_000.0, 600.0);

        let p = score(&[a.clone(), e.clone(), b.clone()]);

        let expected_revenue = a.total_revenue + e.total_revenue + b.total_revenue;
        let expected_cost = a.total_cost + e.total_cost + b.total_cost;
        assert!((p.revenue - expected_revenue).abs() < EPS);
        assert!((p.cost - expected_cost).abs() < EPS);
        assert!((p.gross_margin - (expected_revenue - expected_cost)).abs() < EPS);
    }

    #[test]
    fn test_net_margin_applies_indirect_rate() {
        let p = score(&[leg(LegType::Export, 10_000.0, 100.0)]);
        assert!((p.indirect_cost - 3500.0).abs() < EPS);
        assert!((p.net_margin - (p.gross_margin - 3500.0)).abs() < EPS);
    }
}
