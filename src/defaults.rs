//! Default tariff values.
//!
//! These mirror the parameter sheet the operations team starts from when the
//! configuration store is empty. All monetary amounts are in the local
//! currency unless noted.

/// Tractor fuel efficiency in km per liter.
pub const DEFAULT_TRACTOR_EFFICIENCY_KM_PER_L: f64 = 2.5;

/// Refrigeration unit fuel consumption in liters per hour.
pub const DEFAULT_REEFER_CONSUMPTION_L_PER_HR: f64 = 3.0;

/// Diesel price per liter.
pub const DEFAULT_DIESEL_PRICE: f64 = 24.0;

/// Operator pay per km on import legs.
pub const DEFAULT_IMPORT_RATE_PER_KM: f64 = 2.10;

/// Operator pay per km on export legs.
pub const DEFAULT_EXPORT_RATE_PER_KM: f64 = 2.50;

/// Fixed operator pay for empty (repositioning) legs.
pub const DEFAULT_EMPTY_FIXED_WAGE: f64 = 200.00;

/// Fixed payroll bonus per revenue leg.
pub const DEFAULT_BONUS: f64 = 462.66;

/// USD to local exchange rate.
pub const DEFAULT_USD_RATE: f64 = 19.5;

/// Local currency rate (always 1.0, kept for the parameter sheet shape).
pub const DEFAULT_LOCAL_RATE: f64 = 1.0;
