// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Aggregation of trial results

use crate::metrics::TrialResult;

/// Mean and population standard deviation of one column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnStats {
    pub mean: f64,
    pub std: f64,
}

impl ColumnStats {
    /// Zeros for an empty column
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std: variance.sqrt(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSummary {
    pub pl: ColumnStats,
    pub pf: ColumnStats,
    pub l: ColumnStats,
}

/// One row per executed trial, in trial order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResults {
    rows: Vec<TrialResult>,
}

impl TrialResults {
    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }

    pub fn pl(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.pl).collect()
    }

    pub fn pf(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.pf).collect()
    }

    pub fn l(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.l).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrialResult> + '_ {
        self.rows.iter()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            pl: ColumnStats::of(&self.pl()),
            pf: ColumnStats::of(&self.pf()),
            l: ColumnStats::of(&self.l()),
        }
    }
}

impl From<Vec<TrialResult>> for TrialResults {
    fn from(rows: Vec<TrialResult>) -> Self {
        Self { rows }
    }
}

impl FromIterator<TrialResult> for TrialResults {
    fn from_iter<I: IntoIterator<Item = TrialResult>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_stats() {
        let stats = ColumnStats::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(stats.mean, 5.0);
        // Population (ddof = 0) standard deviation
        assert_eq!(stats.std, 2.0);

        assert_eq!(ColumnStats::of(&[]), ColumnStats::default());
        assert_eq!(ColumnStats::of(&[3.5]), ColumnStats { mean: 3.5, std: 0.0 });
    }

    #[test]
    fn test_summary() {
        let results: TrialResults = vec![
            TrialResult { pl: 1.0, pf: 0.0, l: 10.0 },
            TrialResult { pl: 0.5, pf: 0.2, l: 2.0 },
        ]
        .into_iter()
        .collect();

        assert_eq!(results.len(), 2);
        assert_eq!(results.pl(), vec![1.0, 0.5]);
        let summary = results.summary();
        assert_eq!(summary.pl.mean, 0.75);
        assert_eq!(summary.pl.std, 0.25);
        assert!((summary.pf.mean - 0.1).abs() < 1e-12);
        assert_eq!(summary.l, ColumnStats { mean: 6.0, std: 4.0 });
    }
}
