use chrono::{DateTime, FixedOffset, Local, Timelike};

/// Fixed timestamp for new commits, used by scripts and tests
pub const COMMIT_DATE_ENV: &str = "SPRIG_COMMIT_DATE";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    commit_date: Option<DateTime<FixedOffset>>,
}

impl RepositoryConfig {
    pub fn new(commit_date: Option<DateTime<FixedOffset>>) -> Self {
        RepositoryConfig { commit_date }
    }

    /// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`; anything else is ignored
    pub fn load_from_env() -> Self {
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .and_then(|date_str| match Self::parse_date(&date_str) {
                Some(date) => Some(date),
                None => {
                    tracing::warn!(value = %date_str, "ignoring unparsable {}", COMMIT_DATE_ENV);
                    None
                }
            });

        Self::new(commit_date)
    }

    fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(date_str)
            .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
            .ok()
    }

    /// Timestamp for a commit created now, truncated to whole seconds
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        let timestamp = self
            .commit_date
            .unwrap_or_else(|| Local::now().fixed_offset());

        timestamp.with_nanosecond(0).unwrap_or(timestamp)
    }
}
