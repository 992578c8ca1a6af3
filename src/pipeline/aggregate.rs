//! Team aggregates, rankings, draft quality and top picks.

use super::verdict::{BpaVerdict, WeightedVerdict};
use crate::cli::types::DraftRound;
use crate::models::{
    BpaAggregate, DraftQualityRow, PickRecord, QualityScope, ResultTables, WeightedAggregate,
    WeightedRankRow,
};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Number of picks kept in the top picks table unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 20;

/// Round half to even at two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Arithmetic mean, `None` for no values.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Descending order with missing values last.
fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending "min" ranking: each value ranks one past the number of values
/// strictly greater than it, so ties share the lowest rank (5, 5, 3 → 1, 1, 3).
/// Missing values are unranked.
pub fn rank_min_desc(values: &[Option<f64>]) -> Vec<Option<u32>> {
    values
        .iter()
        .map(|value| {
            let v = (*value)?;
            let above = values.iter().flatten().filter(|&&other| other > v).count();
            Some(above as u32 + 1)
        })
        .collect()
}

/// Rounded mean of `metric` per drafting team, sorted descending.
///
/// Picks with no team label form their own group.
fn team_means(
    picks: &[PickRecord],
    metric: impl Fn(&PickRecord) -> Option<f64>,
) -> Vec<(Option<String>, Option<f64>)> {
    let mut groups: BTreeMap<Option<String>, Vec<f64>> = BTreeMap::new();
    for pick in picks {
        let values = groups.entry(pick.pick.team.clone()).or_default();
        if let Some(v) = metric(pick) {
            values.push(v);
        }
    }

    let mut means: Vec<_> = groups
        .into_iter()
        .map(|(team, values)| (team, mean(values).map(round2)))
        .collect();
    means.sort_by(|a, b| desc_nulls_last(a.1, b.1));
    means
}

/// Mean BPA deviation per team with rank and verdict.
pub fn bpa_aggregate(picks: &[PickRecord]) -> Vec<BpaAggregate> {
    let means = team_means(picks, |p| p.metrics.bpa.map(|v| v as f64));
    let ranks = rank_min_desc(&means.iter().map(|(_, v)| *v).collect::<Vec<_>>());

    means
        .into_iter()
        .zip(ranks)
        .map(|((team, bpa), bpa_rank)| BpaAggregate {
            team,
            bpa,
            bpa_rank,
            verdict: BpaVerdict::classify(bpa),
        })
        .collect()
}

/// Mean weighted value per team with rank and verdict.
pub fn weighted_aggregate(picks: &[PickRecord]) -> Vec<WeightedAggregate> {
    let means = team_means(picks, |p| p.metrics.weighted_value.map(|v| v as f64));
    let ranks = rank_min_desc(&means.iter().map(|(_, v)| *v).collect::<Vec<_>>());

    means
        .into_iter()
        .zip(ranks)
        .map(|((team, weighted_value), weighted_rank)| WeightedAggregate {
            weighted_rank,
            team,
            weighted_value,
            verdict: WeightedVerdict::classify(weighted_value),
        })
        .collect()
}

/// Weighted aggregate rows with each team's BPA rank, ascending by
/// weighted rank.
pub fn weighted_rank_table(
    bpa: &[BpaAggregate],
    weighted: &[WeightedAggregate],
) -> Vec<WeightedRankRow> {
    let bpa_ranks: HashMap<&Option<String>, Option<u32>> =
        bpa.iter().map(|row| (&row.team, row.bpa_rank)).collect();

    let mut rows: Vec<WeightedRankRow> = weighted
        .iter()
        .map(|row| WeightedRankRow {
            bpa_rank: bpa_ranks.get(&row.team).copied().flatten(),
            weighted_rank: row.weighted_rank,
            team: row.team.clone(),
            weighted_value: row.weighted_value,
            verdict: row.verdict,
        })
        .collect();

    rows.sort_by(|a, b| match (a.weighted_rank, b.weighted_rank) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rows
}

/// Mean BPA deviation per round, ascending, followed by the overall mean.
pub fn draft_quality(picks: &[PickRecord]) -> Vec<DraftQualityRow> {
    let mut by_round: BTreeMap<DraftRound, Vec<f64>> = BTreeMap::new();
    for pick in picks {
        if let Some(round) = pick.pick.round {
            let values = by_round.entry(round).or_default();
            if let Some(bpa) = pick.metrics.bpa {
                values.push(bpa as f64);
            }
        }
    }

    let overall = mean(picks.iter().filter_map(|p| p.metrics.bpa).map(|v| v as f64));

    by_round
        .into_iter()
        .map(|(round, values)| DraftQualityRow {
            scope: QualityScope::Round(round),
            average_value: mean(values).map(round2),
        })
        .chain(std::iter::once(DraftQualityRow {
            scope: QualityScope::Overall,
            average_value: overall.map(round2),
        }))
        .collect()
}

/// The `n` picks with the highest weighted value, ties in input order.
pub fn top_picks(picks: &[PickRecord], n: usize) -> Vec<PickRecord> {
    let mut sorted = picks.to_vec();
    sorted.sort_by(|a, b| {
        desc_nulls_last(
            a.metrics.weighted_value.map(|v| v as f64),
            b.metrics.weighted_value.map(|v| v as f64),
        )
    });
    sorted.truncate(n);
    sorted
}

/// Build all four result tables from enriched picks.
pub fn aggregate(picks: &[PickRecord], top_n: usize) -> ResultTables {
    let bpa_df = bpa_aggregate(picks);
    let weighted = weighted_aggregate(picks);
    let weighted_rank = weighted_rank_table(&bpa_df, &weighted);

    ResultTables {
        bpa_df,
        weighted_rank,
        top_20: top_picks(picks, top_n),
        draft_quality: draft_quality(picks),
    }
}
