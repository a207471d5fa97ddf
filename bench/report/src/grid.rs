use crate::plotting::chart_kind::ChartKind;
use crate::plotting::usable_in;
use crate::types::benchmark_record::{
    BenchmarkRecord, BATCH_SIZE, FLUSH_INTERVAL_MS, SERVER_BACKPRESSURE,
};
use std::collections::{BTreeMap, BTreeSet};

/// Server backpressure events indexed by flush interval (rows) and batch size (columns).
#[derive(Debug, Clone, PartialEq)]
pub struct BackpressureGrid {
    pub batch_sizes: Vec<i64>,
    pub flush_intervals: Vec<i64>,
    /// `cells[row][column]`, rows follow `flush_intervals`, columns follow `batch_sizes`.
    pub cells: Vec<Vec<i64>>,
}

impl BackpressureGrid {
    pub const MIN_BATCH_SIZES: usize = 1;
    pub const MIN_FLUSH_INTERVALS: usize = 2;

    /// Build the grid, or `None` when the sweep does not vary both axes.
    ///
    /// Records without a usable batch size, or with a non-numeric flush interval or
    /// backpressure cell, are skipped. A missing flush interval reads as 0 and a
    /// missing backpressure count as 0. When a configuration appears more than once the last
    /// record wins. Configurations that were never measured are 0.
    pub fn build(records: &[BenchmarkRecord]) -> Option<Self> {
        let mut measured: BTreeMap<(i64, i64), i64> = BTreeMap::new();
        let mut batch_sizes = BTreeSet::new();
        let mut flush_intervals = BTreeSet::new();

        for record in records {
            if !usable_in(
                ChartKind::BackpressureHeatmap,
                record,
                &[BATCH_SIZE],
                &[FLUSH_INTERVAL_MS, SERVER_BACKPRESSURE],
            ) {
                continue;
            }
            let Some(batch_size) = record.batch_size else {
                continue;
            };
            let flush_interval = record.flush_interval_or_default();
            batch_sizes.insert(batch_size);
            flush_intervals.insert(flush_interval);
            measured.insert(
                (flush_interval, batch_size),
                record.server_backpressure_or_default(),
            );
        }

        if batch_sizes.len() < Self::MIN_BATCH_SIZES
            || flush_intervals.len() < Self::MIN_FLUSH_INTERVALS
        {
            return None;
        }

        let cells = flush_intervals
            .iter()
            .map(|flush| {
                batch_sizes
                    .iter()
                    .map(|batch| measured.get(&(*flush, *batch)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Some(Self {
            batch_sizes: batch_sizes.into_iter().collect(),
            flush_intervals: flush_intervals.into_iter().collect(),
            cells,
        })
    }

    pub fn value(&self, flush_interval: i64, batch_size: i64) -> Option<i64> {
        let row = self.flush_intervals.iter().position(|f| *f == flush_interval)?;
        let column = self.batch_sizes.iter().position(|b| *b == batch_size)?;
        Some(self.cells[row][column])
    }

    pub fn max_value(&self) -> i64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Cells as `[column, row, value]` triples, the layout a category heatmap expects.
    pub fn as_charming_points(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(move |(column, value)| vec![column as f64, row as f64, *value as f64])
            })
            .collect()
    }
}
