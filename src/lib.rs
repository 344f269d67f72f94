//! Vuelta Engine - costing and round-trip profitability for freight routes
//!
//! This crate is the computation core behind a freight quoting tool: it
//! prices individual route legs (import / export / empty repositioning) from
//! raw capture inputs and a tariff configuration, keeps a catalog of priced
//! legs, and searches that catalog for profitable there-and-back
//! combinations — a direct return, or a return bridged by an empty leg.
//!
//! Everything here is pure, synchronous computation: no I/O, no ambient
//! state. The surrounding application (forms UI, hosted persistence, report
//! rendering) supplies inputs and consumes the typed results.
//!
//! Typical flow:
//!
//! ```
//! use vuelta_engine::{
//!     compute_leg, suggest_returns, CatalogStore, Currency, LegInput, LegType,
//!     TariffConfig, TravelMode,
//! };
//!
//! let config = TariffConfig::default();
//! let store = CatalogStore::new();
//!
//! let import = compute_leg(
//!     &LegInput {
//!         date: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
//!         leg_type: LegType::Import,
//!         client: Some("Acme Produce".into()),
//!         origin: "Nogales".into(),
//!         destination: "Guadalajara".into(),
//!         travel_mode: TravelMode::SingleOperator,
//!         distance_km: 500.0,
//!         revenue_currency: Currency::Local,
//!         freight_revenue: 15_000.0,
//!         crossing_revenue_currency: Currency::Local,
//!         crossing_revenue: 0.0,
//!         crossing_cost_currency: Currency::Local,
//!         crossing_cost: 0.0,
//!         reefer_hours: 0.0,
//!         toll_fees: 0.0,
//!         ancillary: Default::default(),
//!         ancillary_charged_to_client: false,
//!     },
//!     &config,
//! )?;
//! store.insert(import.clone());
//!
//! let suggestions = suggest_returns(&import, &store.snapshot());
//! assert!(suggestions.is_empty()); // nothing scheduled back yet
//! # Ok::<(), vuelta_engine::EngineError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use catalog::{Catalog, CatalogStore, LegQuery};
pub use config::TariffConfig;
pub use error::{EngineError, Result};
pub use services::calculator::compute_leg;
pub use services::combinator::suggest_returns;
pub use services::currency::{convert, resolve_tariff, TariffResolution};
pub use services::ranker::{score, INDIRECT_RATE};
pub use types::{
    AncillaryCharges, ComputedLeg, Currency, LegInput, LegType, Profitability, RouteCombination,
    TravelMode,
};
