//! Tariff configuration management

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;
use crate::error::{EngineError, Result};

/// Economic parameters governing every cost calculation.
///
/// The configuration store (external to this crate) persists these as a flat
/// key-value parameter sheet; [`TariffConfig::from_kv`] rebuilds the typed
/// config from it, falling back to the documented defaults for any missing
/// key. The engine itself treats a `TariffConfig` as an immutable per-call
/// input — it never reads ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffConfig {
    /// Tractor fuel efficiency (km per liter). Must be positive.
    pub tractor_efficiency_km_per_l: f64,
    /// Refrigeration unit fuel consumption (liters per hour). Must be positive.
    pub reefer_consumption_l_per_hr: f64,
    /// Diesel price per liter, local currency.
    pub diesel_price: f64,
    /// Operator pay per km on import legs.
    pub import_rate_per_km: f64,
    /// Operator pay per km on export legs.
    pub export_rate_per_km: f64,
    /// Fixed operator pay for empty legs.
    pub empty_fixed_wage: f64,
    /// Fixed payroll bonus per revenue leg.
    pub bonus: f64,
    /// USD to local exchange rate.
    pub usd_rate: f64,
    /// Local currency rate, kept at 1.0.
    pub local_rate: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            tractor_efficiency_km_per_l: DEFAULT_TRACTOR_EFFICIENCY_KM_PER_L,
            reefer_consumption_l_per_hr: DEFAULT_REEFER_CONSUMPTION_L_PER_HR,
            diesel_price: DEFAULT_DIESEL_PRICE,
            import_rate_per_km: DEFAULT_IMPORT_RATE_PER_KM,
            export_rate_per_km: DEFAULT_EXPORT_RATE_PER_KM,
            empty_fixed_wage: DEFAULT_EMPTY_FIXED_WAGE,
            bonus: DEFAULT_BONUS,
            usd_rate: DEFAULT_USD_RATE,
            local_rate: DEFAULT_LOCAL_RATE,
        }
    }
}

/// Parameter sheet key names, as stored by the configuration collaborator.
pub mod keys {
    pub const TRACTOR_EFFICIENCY: &str = "tractor_efficiency_km_per_l";
    pub const REEFER_CONSUMPTION: &str = "reefer_consumption_l_per_hr";
    pub const DIESEL_PRICE: &str = "diesel_price";
    pub const IMPORT_RATE: &str = "import_rate_per_km";
    pub const EXPORT_RATE: &str = "export_rate_per_km";
    pub const EMPTY_FIXED_WAGE: &str = "empty_fixed_wage";
    pub const BONUS: &str = "bonus";
    pub const USD_RATE: &str = "usd_rate";
    pub const LOCAL_RATE: &str = "local_rate";
}

impl TariffConfig {
    /// Build a config from a flat parameter sheet, using the defaults for
    /// any key the sheet is missing.
    pub fn from_kv(values: &HashMap<String, f64>) -> Self {
        let d = Self::default();
        let get = |key: &str, fallback: f64| values.get(key).copied().unwrap_or(fallback);
        Self {
            tractor_efficiency_km_per_l: get(keys::TRACTOR_EFFICIENCY, d.tractor_efficiency_km_per_l),
            reefer_consumption_l_per_hr: get(keys::REEFER_CONSUMPTION, d.reefer_consumption_l_per_hr),
            diesel_price: get(keys::DIESEL_PRICE, d.diesel_price),
            import_rate_per_km: get(keys::IMPORT_RATE, d.import_rate_per_km),
            export_rate_per_km: get(keys::EXPORT_RATE, d.export_rate_per_km),
            empty_fixed_wage: get(keys::EMPTY_FIXED_WAGE, d.empty_fixed_wage),
            bonus: get(keys::BONUS, d.bonus),
            usd_rate: get(keys::USD_RATE, d.usd_rate),
            local_rate: get(keys::LOCAL_RATE, d.local_rate),
        }
    }

    /// Flatten back to the parameter sheet shape for persistence.
    pub fn to_kv(&self) -> HashMap<String, f64> {
        HashMap::from([
            (keys::TRACTOR_EFFICIENCY.to_string(), self.tractor_efficiency_km_per_l),
            (keys::REEFER_CONSUMPTION.to_string(), self.reefer_consumption_l_per_hr),
            (keys::DIESEL_PRICE.to_string(), self.diesel_price),
            (keys::IMPORT_RATE.to_string(), self.import_rate_per_km),
            (keys::EXPORT_RATE.to_string(), self.export_rate_per_km),
            (keys::EMPTY_FIXED_WAGE.to_string(), self.empty_fixed_wage),
            (keys::BONUS.to_string(), self.bonus),
            (keys::USD_RATE.to_string(), self.usd_rate),
            (keys::LOCAL_RATE.to_string(), self.local_rate),
        ])
    }

    /// Reject values that would corrupt a calculation.
    ///
    /// Tractor efficiency is a divisor and reefer consumption a burn rate;
    /// zero or negative values are a data-entry error, not a usable tariff.
    pub fn validate(&self) -> Result<()> {
        if self.tractor_efficiency_km_per_l <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "tractor efficiency must be positive (got {})",
                self.tractor_efficiency_km_per_l
            )));
        }
        if self.reefer_consumption_l_per_hr <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "reefer consumption must be positive (got {})",
                self.reefer_consumption_l_per_hr
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parameter_sheet() {
        let config = TariffConfig::default();
        assert_eq!(config.tractor_efficiency_km_per_l, 2.5);
        assert_eq!(config.import_rate_per_km, 2.10);
        assert_eq!(config.export_rate_per_km, 2.50);
        assert_eq!(config.bonus, 462.66);
        assert_eq!(config.usd_rate, 19.5);
        assert_eq!(config.local_rate, 1.0);
    }

    #[test]
    fn test_from_kv_overrides_present_keys_only() {
        let mut sheet = HashMap::new();
        sheet.insert(keys::DIESEL_PRICE.to_string(), 26.5);
        sheet.insert(keys::USD_RATE.to_string(), 17.5);

        let config = TariffConfig::from_kv(&sheet);

        assert_eq!(config.diesel_price, 26.5);
        assert_eq!(config.usd_rate, 17.5);
        // Everything else stays at the default
        assert_eq!(config.tractor_efficiency_km_per_l, 2.5);
        assert_eq!(config.empty_fixed_wage, 200.00);
    }

    #[test]
    fn test_kv_round_trip() {
        let config = TariffConfig::default();
        let rebuilt = TariffConfig::from_kv(&config.to_kv());
        assert_eq!(config, rebuilt);
    }

    #[test]
    fn test_validate_rejects_zero_tractor_efficiency() {
        let config = TariffConfig {
            tractor_efficiency_km_per_l: 0.0,
            ..TariffConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_reefer_consumption() {
        let config = TariffConfig {
            reefer_consumption_l_per_hr: -1.0,
            ..TariffConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
