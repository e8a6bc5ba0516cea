/// Till configuration
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TILL_DB_PATH | till_pos.db | SQLite database file |
/// | TILL_LOG_LEVEL | info | tracing level filter |
/// | TILL_LOG_DIR | (unset) | daily-rolling log directory, stderr if unset |
/// | TILL_LOW_STOCK_THRESHOLD | 10 | EOD low-stock cutoff |
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file
    pub db_path: String,
    /// Log level filter: trace | debug | info | warn | error
    pub log_level: String,
    /// Optional directory for daily-rolling log files
    pub log_dir: Option<String>,
    /// Items with stock strictly below this show up in EOD low-stock lists
    pub low_stock_threshold: i64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("TILL_DB_PATH").unwrap_or_else(|_| "till_pos.db".into()),
            log_level: std::env::var("TILL_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("TILL_LOG_DIR").ok(),
            low_stock_threshold: std::env::var("TILL_LOW_STOCK_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "till_pos.db".into(),
            log_level: "info".into(),
            log_dir: None,
            low_stock_threshold: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.db_path, "till_pos.db");
        assert_eq!(config.low_stock_threshold, 10);
        assert!(config.log_dir.is_none());
    }
}
