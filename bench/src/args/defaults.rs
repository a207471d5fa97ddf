pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_DIR: &str = "./charts";
pub const DEFAULT_CHART_WIDTH: u64 = 1600;
pub const DEFAULT_CHART_HEIGHT: u64 = 1200;
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const CSV_EXTENSION: &str = "csv";
pub const COMBINED_FILE_NAME: &str = "charts";
