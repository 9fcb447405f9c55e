//! The greedy weighted set-cover loop shared by both coverage regimes.
//!
//! At each step the cheapest-per-unit-coverage candidate is committed, its residual
//! subtracted from every other candidate, and spent candidates are dropped. The loop
//! terminates when the AOI's remaining measure is exhausted or no candidate is left.

use crate::coverage::CoverageState;
use crate::Result;
use itertools::Itertools;

/// A priced candidate scene, tracked by its residual contribution to the AOI.
#[derive(Debug, Clone)]
pub struct Candidate<C> {
    pub id: String,
    pub price: f64,
    pub state: C,
}

/// The outcome of a single AOI query: the chosen scene ids in commit order, the total
/// price paid, and how much of the AOI's initial measure ended up covered.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub chosen: Vec<String>,
    pub total_price: f64,
    pub covered: f64,
}

/// Runs the greedy selection loop over `candidates` against an AOI of initial measure
/// `aoi_measure`.
///
/// Candidates already spent (no residual contribution) are dropped up front. At each
/// remaining step the candidate with the lowest price-per-unit-measure ratio is
/// committed; ties keep whichever candidate appeared first in `candidates`, matching
/// `Itertools::position_min_by`'s first-minimum behavior.
pub fn select<C: CoverageState>(mut candidates: Vec<Candidate<C>>, aoi_measure: f64) -> Result<Outcome> {
    candidates.retain(|c| !c.state.is_spent());

    let mut chosen = Vec::new();
    let mut covered = 0.0;
    let mut total_price = 0.0;

    while covered < aoi_measure && !candidates.is_empty() {
        let pick = candidates
            .iter()
            .position_min_by(|a, b| {
                let ra = a.price / a.state.measure();
                let rb = b.price / b.state.measure();
                ra.partial_cmp(&rb).expect("price/measure ratio is never NaN")
            })
            .expect("candidates is non-empty");

        let committed = candidates.remove(pick);
        log::debug!(
            "committing scene {} (price {}, contributes {} units)",
            committed.id,
            committed.price,
            committed.state.measure()
        );

        covered += committed.state.measure();
        total_price += committed.price;
        chosen.push(committed.id.clone());

        for other in candidates.iter_mut() {
            other.state.subtract(&committed.state)?;
        }
        candidates.retain(|c| !c.state.is_spent());
    }

    Ok(Outcome {
        chosen,
        total_price,
        covered,
    })
}

#[cfg(test)]
mod selector_tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct UnitsLeft(f64);

    impl CoverageState for UnitsLeft {
        fn measure(&self) -> f64 {
            self.0
        }
        fn is_spent(&self) -> bool {
            self.0 <= 0.0
        }
        fn subtract(&mut self, committed: &Self) -> Result<()> {
            self.0 = (self.0 - committed.0).max(0.0);
            Ok(())
        }
    }

    fn candidate(id: &str, price: f64, units: f64) -> Candidate<UnitsLeft> {
        Candidate {
            id: id.to_string(),
            price,
            state: UnitsLeft(units),
        }
    }

    #[test]
    fn picks_cheapest_ratio_first() {
        let candidates = vec![candidate("expensive", 10.0, 1.0), candidate("cheap", 1.0, 1.0)];
        let outcome = select(candidates, 1.0).unwrap();
        assert_eq!(outcome.chosen, vec!["cheap"]);
        assert_eq!(outcome.total_price, 1.0);
    }

    #[test]
    fn stops_once_aoi_measure_is_covered() {
        let candidates = vec![candidate("a", 1.0, 5.0), candidate("b", 1.0, 5.0), candidate("c", 1.0, 5.0)];
        let outcome = select(candidates, 5.0).unwrap();
        assert_eq!(outcome.chosen.len(), 1);
        assert_eq!(outcome.covered, 5.0);
    }

    #[test]
    fn ties_keep_first_seen_candidate() {
        let candidates = vec![candidate("first", 1.0, 1.0), candidate("second", 1.0, 1.0)];
        let outcome = select(candidates, 1.0).unwrap();
        assert_eq!(outcome.chosen, vec!["first"]);
    }

    #[test]
    fn exhausts_all_candidates_without_full_coverage() {
        let candidates = vec![candidate("a", 1.0, 1.0), candidate("b", 1.0, 1.0)];
        let outcome = select(candidates, 10.0).unwrap();
        assert_eq!(outcome.chosen.len(), 2);
        assert_eq!(outcome.covered, 2.0);
    }

    #[test]
    fn spent_candidates_are_dropped_before_the_loop_starts() {
        let candidates = vec![candidate("dead", 1.0, 0.0), candidate("alive", 1.0, 3.0)];
        let outcome = select(candidates, 3.0).unwrap();
        assert_eq!(outcome.chosen, vec!["alive"]);
    }
}
