use crate::types::{Group, RankedObservation};

/// Combined sample with average ranks and the sizes of every tie group.
#[derive(Debug, Clone)]
pub struct RankedSample {
    /// Observations in ascending value order.
    pub observations: Vec<RankedObservation>,
    /// Size (>= 2) of each maximal run of equal values, in ascending value order.
    pub tie_groups: Vec<usize>,
}

impl RankedSample {
    /// Sum of ranks held by `group`.
    pub fn rank_sum(&self, group: Group) -> f64 {
        self.observations
            .iter()
            .filter(|o| o.group == group)
            .map(|o| o.rank)
            .sum()
    }

    /// Σ(t³ − t) over tie-group sizes t.
    pub fn tie_correction(&self) -> f64 {
        self.tie_groups
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum()
    }
}

/// Merges `x` and `y`, sorts ascending and assigns average ranks to ties.
///
/// A run of equal values spanning 1-based positions `i..=j` gets rank
/// `i + (j - i) / 2` for every member, the same convention as fractional
/// ("average") ranking elsewhere. Order among equal values is irrelevant.
pub fn assign_tied_ranks(x: &[f64], y: &[f64]) -> RankedSample {
    let mut combined: Vec<(f64, Group)> = x
        .iter()
        .map(|&v| (v, Group::X))
        .chain(y.iter().map(|&v| (v, Group::Y)))
        .collect();
    combined.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut observations = Vec::with_capacity(combined.len());
    let mut tie_groups = Vec::new();
    let mut start = 0;

    while start < combined.len() {
        let value = combined[start].0;
        let mut end = start;
        while end + 1 < combined.len() && combined[end + 1].0 == value {
            end += 1;
        }

        // 1-based positions start+1 ..= end+1
        let first = (start + 1) as f64;
        let last = (end + 1) as f64;
        let rank = first + (last - first) / 2.0;

        let run_len = end - start + 1;
        if run_len > 1 {
            tie_groups.push(run_len);
        }

        for &(value, group) in &combined[start..=end] {
            observations.push(RankedObservation { value, group, rank });
        }

        start = end + 1;
    }

    RankedSample {
        observations,
        tie_groups,
    }
}
