//! Application configuration.
//!
//! Values come from build-time environment variables with runtime fallbacks
//! derived from the current window location.

/// Port of the GraphQL API when no explicit endpoint is configured.
pub const DEFAULT_API_PORT: u16 = 5000;

/// Rows per page in the query result table.
pub const RESULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub graphql_url: String,
    pub log_level: log::Level,
    pub page_size: usize,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            graphql_url: option_env!("QUERYLENS_GRAPHQL_URL")
                .map(str::to_string)
                .unwrap_or_else(default_graphql_url),
            log_level: parse_log_level(option_env!("QUERYLENS_LOG_LEVEL")),
            page_size: RESULT_PAGE_SIZE,
        }
    }
}

/// `{protocol}//{hostname}:5000/graphql` of the page the app is served from.
pub fn default_graphql_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}/graphql", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    graphql_url_for(&protocol, &hostname)
}

pub fn graphql_url_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/graphql", protocol, hostname, DEFAULT_API_PORT)
}

pub fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_url_for() {
        assert_eq!(
            graphql_url_for("https:", "app.example.com"),
            "https://app.example.com:5000/graphql"
        );
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(Some("warn")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("INFO")), log::Level::Info);
        assert_eq!(parse_log_level(Some("loud")), log::Level::Debug);
        assert_eq!(parse_log_level(None), log::Level::Debug);
    }
}
