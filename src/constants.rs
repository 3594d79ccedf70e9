//! Constants used throughout the crate

// Config locations
pub const LOCAL_CONFIG_FILE_NAME: &str = "datehash.toml";
pub const CONFIG_DIR_NAME: &str = "datehash";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Month grid header labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const USAGE: &str = "Usage: datehash [YEAR MONTH] | datehash --init-config";
