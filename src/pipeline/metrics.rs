//! Per-pick metrics: expected value, BPA deviation and weighted value.

use super::PipelineDiagnostics;
use crate::models::{PickMetrics, PickRecord, ReconciledPick};
use crate::reference::ReferenceTables;
use log::{debug, warn};

/// Expected value for the pick's (round, slot), if the table has one.
pub fn expected_value(pick: &ReconciledPick, refs: &ReferenceTables) -> Option<i64> {
    refs.expected.get(pick.round?, pick.slot?)
}

/// Positional average for the pick's round and position; `None` when there
/// is no entry.
pub fn positional_average(pick: &ReconciledPick, refs: &ReferenceTables) -> Option<f64> {
    refs.positional.get(pick.round?, pick.position.as_ref()?)
}

/// `floor(fo * (fo / pos_avg))`, undefined for a zero average.
///
/// ```rust
/// use draft_grades::pipeline::metrics::weighted_value;
///
/// assert_eq!(weighted_value(60, 50.0), Some(72));
/// assert_eq!(weighted_value(60, 0.0), None);
/// ```
pub fn weighted_value(future_overall: i64, pos_avg: f64) -> Option<i64> {
    if pos_avg == 0.0 {
        return None;
    }
    let fo = future_overall as f64;
    let value = (fo * (fo / pos_avg)).floor();
    value.is_finite().then_some(value as i64)
}

/// Enrich reconciled picks with their derived metrics.
///
/// Missing reference entries degrade to zero and are counted in
/// `diagnostics`.
pub fn compute_metrics(
    picks: Vec<ReconciledPick>,
    refs: &ReferenceTables,
    diagnostics: &mut PipelineDiagnostics,
) -> Vec<PickRecord> {
    picks
        .into_iter()
        .map(|pick| {
            let expected_fv = expected_value(&pick, refs).unwrap_or_else(|| {
                debug!(
                    "no expected value for round {:?} pick {:?} ({} {})",
                    pick.round, pick.slot, pick.first_name, pick.last_name
                );
                diagnostics.missing_expected_value += 1;
                0
            });

            let pos_avg = positional_average(&pick, refs).unwrap_or_else(|| {
                debug!(
                    "no positional average for round {:?} position {:?}",
                    pick.round, pick.position
                );
                diagnostics.missing_positional_average += 1;
                0.0
            });

            let bpa = pick.future_overall.map(|fo| fo - expected_fv);

            let weighted = pick.future_overall.and_then(|fo| {
                let value = weighted_value(fo, pos_avg);
                if value.is_none() {
                    warn!(
                        "weighted value undefined for {} {} (positional average {})",
                        pick.first_name, pick.last_name, pos_avg
                    );
                    diagnostics.undefined_weighted_value += 1;
                }
                value
            });

            PickRecord {
                pick,
                metrics: PickMetrics {
                    expected_fv,
                    bpa,
                    pos_avg,
                    weighted_value: weighted,
                },
            }
        })
        .collect()
}
