use super::TransitionCountRow;
use crate::model::{Phase, Transition};
use itertools::Itertools;
use std::{cmp::Reverse, collections::HashMap};

/// counts of each (transition, phase) pair observed across a dataset.
///
/// this is an additive monoid: partial counts from different workers may be
/// combined with [`AggregateCounts::merge`] in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateCounts {
    counts: HashMap<(Transition, Phase), u64>,
}

impl AggregateCounts {
    pub fn new() -> AggregateCounts {
        Self::default()
    }

    /// increments the count for this transition in this phase by one.
    pub fn add(&mut self, transition: Transition, phase: Phase) {
        *self.counts.entry((transition, phase)).or_insert(0) += 1;
    }

    /// adds one occurrence for each transition in the phase.
    pub fn add_all<I>(&mut self, transitions: I, phase: Phase)
    where
        I: IntoIterator<Item = Transition>,
    {
        for transition in transitions {
            self.add(transition, phase);
        }
    }

    /// key-wise sum of two partial aggregates.
    pub fn merge(self, other: AggregateCounts) -> AggregateCounts {
        // fold the smaller map into the larger one
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self.counts, other.counts)
        } else {
            (other.counts, self.counts)
        };
        for (key, count) in from {
            *into.entry(key).or_insert(0) += count;
        }
        AggregateCounts { counts: into }
    }

    pub fn get(&self, transition: &Transition, phase: Phase) -> u64 {
        self.counts
            .get(&(transition.clone(), phase))
            .copied()
            .unwrap_or_default()
    }

    /// number of distinct (transition, phase) keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// sum of all counts in a phase
    pub fn total(&self, phase: Phase) -> u64 {
        self.counts
            .iter()
            .filter(|((_, p), _)| *p == phase)
            .map(|(_, c)| c)
            .sum()
    }

    /// materializes the table rows: ascending rows first, then descending, each by
    /// descending count and then by transition text.
    pub fn to_rows(&self) -> Vec<TransitionCountRow> {
        self.counts
            .iter()
            .map(|((transition, phase), count)| TransitionCountRow {
                transition: transition.to_string(),
                count: *count,
                phase: *phase,
            })
            .sorted_by(|a, b| {
                (a.phase, Reverse(a.count), &a.transition).cmp(&(
                    b.phase,
                    Reverse(b.count),
                    &b.transition,
                ))
            })
            .collect_vec()
    }
}

#[cfg(test)]
mod test {
    use super::AggregateCounts;
    use crate::model::{ModeLabel, Phase, Transition};

    fn t(from: &str, to: &str) -> Transition {
        Transition::new(
            ModeLabel::try_from(from).expect("test invariant failed"),
            ModeLabel::try_from(to).expect("test invariant failed"),
        )
        .expect("test invariant failed")
    }

    #[test]
    fn test_counts_keyed_by_phase() {
        let mut counts = AggregateCounts::new();
        counts.add(t("walking", "subway"), Phase::Ascending);
        counts.add(t("walking", "subway"), Phase::Ascending);
        counts.add(t("walking", "subway"), Phase::Descending);
        assert_eq!(counts.get(&t("walking", "subway"), Phase::Ascending), 2);
        assert_eq!(counts.get(&t("walking", "subway"), Phase::Descending), 1);
        assert_eq!(counts.get(&t("subway", "walking"), Phase::Descending), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(Phase::Ascending), 2);
    }

    #[test]
    fn test_merge_is_keywise_sum() {
        let mut a = AggregateCounts::new();
        a.add_all([t("walking", "bus"), t("bus", "subway")], Phase::Ascending);
        let mut b = AggregateCounts::new();
        b.add_all([t("walking", "bus")], Phase::Ascending);
        b.add_all([t("subway", "walking")], Phase::Descending);

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab, ba);
        assert_eq!(ab.get(&t("walking", "bus"), Phase::Ascending), 2);
        assert_eq!(ab.get(&t("bus", "subway"), Phase::Ascending), 1);
        assert_eq!(ab.get(&t("subway", "walking"), Phase::Descending), 1);
        assert_eq!(ab.merge(AggregateCounts::new()).len(), 3);
    }

    #[test]
    fn test_rows_ordering() {
        let mut counts = AggregateCounts::new();
        counts.add_all(
            [
                t("bus", "subway"),
                t("walking", "bus"),
                t("walking", "bus"),
                t("walking", "subway"),
            ],
            Phase::Ascending,
        );
        counts.add_all([t("subway", "walking")], Phase::Descending);
        let rows = counts
            .to_rows()
            .into_iter()
            .map(|r| (r.transition, r.count, r.phase))
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![
                (String::from("walking -> bus"), 2, Phase::Ascending),
                (String::from("bus -> subway"), 1, Phase::Ascending),
                (String::from("walking -> subway"), 1, Phase::Ascending),
                (String::from("subway -> walking"), 1, Phase::Descending),
            ]
        );
    }
}
