//! Leg cost/revenue calculator
//!
//! Turns raw capture-form inputs plus a tariff config into a fully costed
//! [`ComputedLeg`]. Pure and deterministic: identical inputs always produce
//! an identical leg.

use tracing::debug;

use crate::config::TariffConfig;
use crate::error::Result;
use crate::services::currency::{convert, resolve_tariff};
use crate::types::{ComputedLeg, Currency, LegInput};

/// Normalize a free-text location or client label for matching.
///
/// The catalog matches legs by origin/destination equality, so labels are
/// trimmed and uppercased once here rather than at every comparison.
fn normalize(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Exchange rate applied when converting `currency` to local.
fn applied_rate(currency: Currency, config: &TariffConfig) -> f64 {
    match currency {
        Currency::Usd => config.usd_rate,
        Currency::Local => config.local_rate,
    }
}

/// Compute the full cost/revenue breakdown for one leg.
///
/// Fails with [`EngineError::InvalidConfiguration`] when the config carries a
/// non-positive tractor efficiency or reefer consumption; every other
/// missing numeric input is treated as zero.
///
/// [`EngineError::InvalidConfiguration`]: crate::error::EngineError::InvalidConfiguration
pub fn compute_leg(input: &LegInput, config: &TariffConfig) -> Result<ComputedLeg> {
    config.validate()?;

    let fuel_cost_tractor =
        (input.distance_km / config.tractor_efficiency_km_per_l) * config.diesel_price;
    let fuel_cost_reefer =
        input.reefer_hours * config.reefer_consumption_l_per_hr * config.diesel_price;

    let tariff = resolve_tariff(input.leg_type, input.travel_mode, input.distance_km, config);

    let ancillary_total = input.ancillary.total();

    let converted_freight_revenue = convert(
        input.freight_revenue,
        input.revenue_currency,
        Currency::Local,
        config.usd_rate,
    );
    let converted_crossing_revenue = convert(
        input.crossing_revenue,
        input.crossing_revenue_currency,
        Currency::Local,
        config.usd_rate,
    );
    let converted_crossing_cost = convert(
        input.crossing_cost,
        input.crossing_cost_currency,
        Currency::Local,
        config.usd_rate,
    );

    let mut total_revenue = converted_freight_revenue + converted_crossing_revenue;
    if input.ancillary_charged_to_client {
        total_revenue += ancillary_total;
    }

    let total_cost = fuel_cost_tractor
        + fuel_cost_reefer
        + tariff.wage
        + tariff.bonus
        + input.toll_fees
        + ancillary_total
        + converted_crossing_cost;

    debug!(
        leg_type = %input.leg_type,
        distance_km = input.distance_km,
        total_revenue,
        total_cost,
        "computed leg"
    );

    Ok(ComputedLeg {
        id: None,
        date: input.date,
        leg_type: input.leg_type,
        client: input.client.as_deref().map(normalize),
        origin: normalize(&input.origin),
        destination: normalize(&input.destination),
        travel_mode: input.travel_mode,
        distance_km: input.distance_km,
        revenue_currency: input.revenue_currency,
        freight_revenue: input.freight_revenue,
        freight_exchange_rate: applied_rate(input.revenue_currency, config),
        converted_freight_revenue,
        crossing_revenue_currency: input.crossing_revenue_currency,
        crossing_revenue: input.crossing_revenue,
        crossing_exchange_rate: applied_rate(input.crossing_revenue_currency, config),
        converted_crossing_revenue,
        crossing_cost_currency: input.crossing_cost_currency,
        crossing_cost: input.crossing_cost,
        crossing_cost_exchange_rate: applied_rate(input.crossing_cost_currency, config),
        converted_crossing_cost,
        total_revenue,
        fuel_cost_tractor,
        fuel_cost_reefer,
        per_km_rate: tariff.per_km_rate,
        wage: tariff.wage,
        bonus: tariff.bonus,
        reefer_hours: input.reefer_hours,
        toll_fees: input.toll_fees,
        ancillary: input.ancillary,
        ancillary_total,
        ancillary_charged_to_client: input.ancillary_charged_to_client,
        total_cost,
    })
}
