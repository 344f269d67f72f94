//! Currency conversion and tariff resolution

use crate::config::TariffConfig;
use crate::types::{Currency, LegType, TravelMode};

/// Convert an amount between currencies at the given USD rate.
///
/// Matching currencies are an identity. Local→USD divides by the rate,
/// USD→Local multiplies. The typed [`Currency`] enum leaves no room for an
/// unrecognized pair.
pub fn convert(amount: f64, from: Currency, to: Currency, usd_rate: f64) -> f64 {
    match (from, to) {
        (Currency::Local, Currency::Usd) => amount / usd_rate,
        (Currency::Usd, Currency::Local) => amount * usd_rate,
        _ => amount,
    }
}

/// Wage schedule resolved for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffResolution {
    /// Per-km rate for the leg class (0 for empty legs).
    pub per_km_rate: f64,
    pub wage: f64,
    pub bonus: f64,
}

/// Resolve the wage schedule for a leg class and crew configuration.
///
/// Import and export legs are paid per km at class-specific rates plus the
/// fixed bonus; empty legs get the fixed repositioning wage and no bonus.
/// Team crews double both wage and bonus.
pub fn resolve_tariff(
    leg_type: LegType,
    travel_mode: TravelMode,
    distance_km: f64,
    config: &TariffConfig,
) -> TariffResolution {
    let factor = travel_mode.crew_factor();
    let (per_km_rate, base_wage, base_bonus) = match leg_type {
        LegType::Import => (
            config.import_rate_per_km,
            distance_km * config.import_rate_per_km,
            config.bonus,
        ),
        LegType::Export => (
            config.export_rate_per_km,
            distance_km * config.export_rate_per_km,
            config.bonus,
        ),
        LegType::Empty => (0.0, config.empty_fixed_wage, 0.0),
    };
    TariffResolution {
        per_km_rate,
        wage: base_wage * factor,
        bonus: base_bonus * factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_convert_identity_same_currency() {
        assert_eq!(convert(100.0, Currency::Local, Currency::Local, 19.5), 100.0);
        assert_eq!(convert(100.0, Currency::Usd, Currency::Usd, 19.5), 100.0);
    }

    #[test]
    fn test_convert_usd_to_local_multiplies() {
        assert!((convert(10.0, Currency::Usd, Currency::Local, 19.5) - 195.0).abs() < EPS);
    }

    #[test]
    fn test_convert_local_to_usd_divides() {
        assert!((convert(195.0, Currency::Local, Currency::Usd, 19.5) - 10.0).abs() < EPS);
    }

    #[test]
    fn test_convert_round_trip() {
        for rate in [1.0, 17.5, 19.5, 21.3] {
            let there = convert(1234.56, Currency::Local, Currency::Usd, rate);
            let back = convert(there, Currency::Usd, Currency::Local, rate);
            assert!((back - 1234.56).abs() < EPS, "rate {rate}");
        }
    }

    #[test]
    fn test_import_tariff() {
        let config = TariffConfig::default();
        let t = resolve_tariff(LegType::Import, TravelMode::SingleOperator, 500.0, &config);
        assert!((t.per_km_rate - 2.10).abs() < EPS);
        assert!((t.wage - 1050.0).abs() < EPS);
        assert!((t.bonus - 462.66).abs() < EPS);
    }

    #[test]
    fn test_export_tariff() {
        let config = TariffConfig::default();
        let t = resolve_tariff(LegType::Export, TravelMode::SingleOperator, 400.0, &config);
        assert!((t.per_km_rate - 2.50).abs() < EPS);
        assert!((t.wage - 1000.0).abs() < EPS);
        assert!((t.bonus - 462.66).abs() < EPS);
    }

    #[test]
    fn test_empty_tariff_fixed_wage_no_bonus() {
        let config = TariffConfig::default();
        let t = resolve_tariff(LegType::Empty, TravelMode::SingleOperator, 350.0, &config);
        assert_eq!(t.per_km_rate, 0.0);
        assert!((t.wage - 200.0).abs() < EPS);
        assert_eq!(t.bonus, 0.0);
    }

    #[test]
    fn test_team_doubles_wage_and_bonus() {
        let config = TariffConfig::default();
        let single = resolve_tariff(LegType::Import, TravelMode::SingleOperator, 500.0, &config);
        let team = resolve_tariff(LegType::Import, TravelMode::Team, 500.0, &config);
        assert!((team.wage - 2.0 * single.wage).abs() < EPS);
        assert!((team.bonus - 2.0 * single.bonus).abs() < EPS);
        assert_eq!(team.per_km_rate, single.per_km_rate);
    }

    #[test]
    fn test_team_doubles_empty_fixed_wage() {
        let config = TariffConfig::default();
        let t = resolve_tariff(LegType::Empty, TravelMode::Team, 0.0, &config);
        assert!((t.wage - 400.0).abs() < EPS);
        assert_eq!(t.bonus, 0.0);
    }
}
