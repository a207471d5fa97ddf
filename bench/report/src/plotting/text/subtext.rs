use crate::sweep_summary::SweepSummary;
use human_repr::HumanCount;

impl SweepSummary {
    pub fn subtext(&self) -> String {
        let sweep_text = self.format_sweep();
        let traffic_text = self.format_traffic();
        if traffic_text.is_empty() {
            sweep_text
        } else {
            format!("{sweep_text}\n{traffic_text}")
        }
    }

    pub fn format_sweep(&self) -> String {
        let mut parts = vec![format!("{} Configurations", self.records)];
        if !self.batch_sizes.is_empty() {
            parts.push(format!("Batch Sizes {}", join(&self.batch_sizes)));
        }
        parts.push(format!("Flush Intervals {} ms", join(&self.flush_intervals)));
        if !self.payload_bytes.is_empty() {
            let payloads = self
                .payload_bytes
                .iter()
                .map(|bytes| ((*bytes).max(0) as u64).human_count_bytes().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("Payload {payloads}"));
        }
        parts.join("  •  ")
    }

    fn format_traffic(&self) -> String {
        let mut parts = Vec::new();
        if self.total_received > 0 {
            parts.push(format!(
                "Received {} Messages",
                self.total_received.human_count_bare()
            ));
        }
        if self.total_dropped > 0 {
            parts.push(format!(
                "Dropped {} Messages",
                self.total_dropped.human_count_bare()
            ));
        }
        if self.total_server_backpressure > 0 {
            parts.push(format!(
                "{} Server Backpressure Events",
                self.total_server_backpressure
            ));
        }
        parts.join("  •  ")
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
