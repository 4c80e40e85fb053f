//! Insight derivation from aggregate tables.

use aco_model::{Insight, PartyCount, TimeSeries};

/// Party with the most cases: the last row of the ascending party counts.
///
/// Falls back to [`Insight::NoData`] for an empty table.
pub fn top_litigant(cases_by_party: &[PartyCount]) -> Insight {
    match cases_by_party.last() {
        Some(top) => Insight::TopLitigant {
            party: top.party.clone(),
            cases: top.count,
        },
        None => Insight::NoData,
    }
}

/// Year with the most decisions summed across outcomes.
///
/// When several years share the maximum, the earliest one wins.
pub fn peak_year(series: &TimeSeries) -> Insight {
    let mut peak: Option<(i32, usize)> = None;
    for (year, decisions) in series.year_totals() {
        match peak {
            Some((_, best)) if decisions <= best => {}
            _ => peak = Some((year, decisions)),
        }
    }
    match peak {
        Some((year, decisions)) => Insight::PeakYear { year, decisions },
        None => Insight::NoData,
    }
}
