use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub graphql_endpoint: String,
    pub admin_secret: String,
    pub env: Environment,
    pub log_level: String,
    pub feed_path: PathBuf,
    pub feed_title: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Six-field cron expression (seconds first) used by `adfeed-cli schedule`.
    pub schedule: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("graphql_endpoint", &self.graphql_endpoint)
            .field("admin_secret", &"[redacted]")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("feed_path", &self.feed_path)
            .field("feed_title", &self.feed_title)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("schedule", &self.schedule)
            .finish()
    }
}
