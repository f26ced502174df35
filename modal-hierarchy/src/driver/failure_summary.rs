use super::RowFailure;
use crate::model::RouteErrorKind;
use itertools::Itertools;
use serde::Serialize;
use std::{collections::BTreeMap, fmt::Display};

/// failed-row counts by error kind for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FailureSummary {
    pub total_rows: usize,
    pub failed_rows: usize,
    pub by_kind: BTreeMap<RouteErrorKind, usize>,
}

impl FailureSummary {
    pub fn new(total_rows: usize, failures: &[RowFailure]) -> FailureSummary {
        let by_kind = failures.iter().map(|f| f.kind).counts();
        FailureSummary {
            total_rows,
            failed_rows: failures.len(),
            by_kind: by_kind.into_iter().collect(),
        }
    }

    pub fn succeeded_rows(&self) -> usize {
        self.total_rows - self.failed_rows
    }

    pub fn count(&self, kind: RouteErrorKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.failed_rows == 0
    }
}

impl Display for FailureSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} rows failed", self.failed_rows, self.total_rows)?;
        if !self.by_kind.is_empty() {
            let kinds = self
                .by_kind
                .iter()
                .map(|(kind, count)| format!("{kind}={count}"))
                .join(", ");
            write!(f, " ({kinds})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::FailureSummary;
    use crate::driver::RowFailure;
    use crate::model::{RouteError, RouteErrorKind};

    #[test]
    fn test_summary_counts_by_kind() {
        let failures = vec![
            RowFailure::new(1, &RouteError::EmptyRoute),
            RowFailure::new(
                4,
                &RouteError::MalformedSegment {
                    text: String::from("bus(15"),
                    index: 0,
                    offset: 0,
                },
            ),
            RowFailure::new(9, &RouteError::EmptyRoute),
        ];
        let summary = FailureSummary::new(10, &failures);
        assert_eq!(summary.failed_rows, 3);
        assert_eq!(summary.succeeded_rows(), 7);
        assert_eq!(summary.count(RouteErrorKind::EmptyRoute), 2);
        assert_eq!(summary.count(RouteErrorKind::MalformedSegment), 1);
        assert_eq!(summary.count(RouteErrorKind::SelfTransition), 0);
        assert_eq!(
            summary.to_string(),
            "3 of 10 rows failed (EmptyRoute=2, MalformedSegment=1)"
        );
    }
}
