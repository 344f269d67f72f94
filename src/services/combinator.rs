//! Round-trip combination search
//!
//! Given a primary leg and a catalog snapshot, enumerates feasible return
//! trips — direct returns of the opposite class, or returns bridged by an
//! empty repositioning leg — and ranks them by the gross percentage margin
//! of the whole round trip.

use tracing::debug;

use crate::catalog::Catalog;
use crate::services::ranker::score;
use crate::types::{ComputedLeg, LegType, RouteCombination};

/// Return-leg classes that close a round trip for the given primary class.
fn return_types(primary: LegType) -> &'static [LegType] {
    match primary {
        LegType::Import => &[LegType::Export],
        LegType::Export => &[LegType::Import],
        // An empty primary returns against either revenue class
        LegType::Empty => &[LegType::Import, LegType::Export],
    }
}

fn is_return_for(leg: &ComputedLeg, primary: LegType) -> bool {
    return_types(primary).contains(&leg.leg_type)
}

/// Build a combination from legs in travel order, scoring the aggregate.
///
/// Revenue and cost are summed over the member legs, never recomputed as a
/// monolithic leg.
fn combine(legs: Vec<ComputedLeg>, description_base: String) -> RouteCombination {
    let profitability = score(&legs);
    let description = format!("{description_base} ({:.2}%)", profitability.gross_pct);
    RouteCombination {
        legs,
        description,
        profitability,
    }
}

/// Suggest return-trip combinations for a primary leg, best first.
///
/// Candidate discovery order is fixed: direct returns in catalog order, then
/// bridged returns grouped by empty leg in catalog order. The final sort by
/// gross percentage is stable, so ties keep discovery order. An empty result
/// is a normal outcome — there is simply nothing scheduled out of the
/// primary's destination.
pub fn suggest_returns(primary: &ComputedLeg, catalog: &Catalog) -> Vec<RouteCombination> {
    let mut suggestions: Vec<RouteCombination> = Vec::new();

    if primary.leg_type.is_revenue() {
        // Direct returns of the opposite class out of the primary's destination
        for candidate in catalog
            .all()
            .iter()
            .filter(|l| is_return_for(l, primary.leg_type) && l.origin == primary.destination)
        {
            let base = format!(
                "{} — {} → {} → {}",
                candidate.date,
                candidate.client_label(),
                candidate.origin,
                candidate.destination
            );
            suggestions.push(combine(vec![primary.clone(), candidate.clone()], base));
        }

        // Returns bridged by an empty repositioning leg
        for bridge in catalog
            .all()
            .iter()
            .filter(|l| l.leg_type == LegType::Empty && l.origin == primary.destination)
        {
            for candidate in catalog
                .all()
                .iter()
                .filter(|l| is_return_for(l, primary.leg_type) && l.origin == bridge.destination)
            {
                let base = format!(
                    "{} — {} (empty {} → {}) → {}",
                    candidate.date,
                    candidate.client_label(),
                    bridge.origin,
                    bridge.destination,
                    candidate.destination
                );
                suggestions.push(combine(
                    vec![primary.clone(), bridge.clone(), candidate.clone()],
                    base,
                ));
            }
        }
    } else {
        // The primary is itself the empty bridge: any revenue leg out of its
        // destination closes the trip directly.
        for candidate in catalog
            .all()
            .iter()
            .filter(|l| is_return_for(l, primary.leg_type) && l.origin == primary.destination)
        {
            let base = format!(
                "{} — {} {} → {}",
                candidate.date,
                candidate.client_label(),
                candidate.origin,
                candidate.destination
            );
            suggestions.push(combine(vec![primary.clone(), candidate.clone()], base));
        }
    }

    // Best gross percentage first; the sort is stable so ties keep
    // discovery order
    suggestions.sort_by(|a, b| {
        b.profitability
            .gross_pct
            .partial_cmp(&a.profitability.gross_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        primary_destination = %primary.destination,
        suggestions = suggestions.len(),
        "return combination search finished"
    );

    suggestions
}
