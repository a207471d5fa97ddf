pub mod benchmark_record;
pub mod buffering_stats;
pub mod field_value;
pub mod raw_record;
pub mod slice_sweep;
pub mod sweep_summary;
