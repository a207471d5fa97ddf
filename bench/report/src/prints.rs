use colored::{Color, ColoredString, Colorize};
use human_repr::HumanCount;
use tracing::info;

use crate::sweep_summary::{ConfigurationHighlight, SweepSummary};

impl SweepSummary {
    pub fn print_summary(&self, files: usize) {
        let sweep_print = format!(
            "Loaded {} benchmark records from {} files: {}\n",
            self.records,
            files,
            self.format_sweep()
        )
        .blue();

        info!("{}", sweep_print);

        if let Some(best) = &self.best_throughput {
            info!("{}", best.formatted_string("Best throughput", "msg/s", Color::Green));
        }
        if let Some(lowest) = &self.lowest_p99 {
            info!("{}", lowest.formatted_string("Lowest p99 latency", "ms", Color::Green));
        }

        let color = if self.total_dropped > 0 || self.total_server_backpressure > 0 {
            Color::Red
        } else {
            Color::Green
        };
        let totals = format!(
            "Received {} messages, dropped {}, client backpressure events: {}, server backpressure events: {}",
            self.total_received.human_count_bare(),
            self.total_dropped.human_count_bare(),
            self.total_client_backpressure,
            self.total_server_backpressure,
        )
        .color(color);
        info!("{}\n", totals);
    }
}

impl ConfigurationHighlight {
    pub fn formatted_string(&self, prefix: &str, unit: &str, color: Color) -> ColoredString {
        format!(
            "{}: {:.2} {} at batch size {}, flush interval {} ms",
            prefix, self.value, unit, self.batch_size, self.flush_interval_ms
        )
        .color(color)
    }
}
