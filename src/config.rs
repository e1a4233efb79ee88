use std::env;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Broker WebSocket endpoint.
    pub broker_url: String,
    /// Topic carrying price-update batches.
    pub topic: String,
    /// Delay before a reconnect attempt.
    pub reconnect_delay: Duration,
    /// TUI tick rate.
    pub tick_rate: Duration,
    /// Log file path (stdout belongs to the TUI).
    pub log_file: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            broker_url: env::var("BROKER_URL").unwrap_or(defaults.broker_url),
            topic: env::var("FEED_TOPIC").unwrap_or(defaults.topic),
            reconnect_delay: env::var("RECONNECT_DELAY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.reconnect_delay),
            tick_rate: env::var("TICK_RATE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_rate),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            broker_url: "ws://127.0.0.1:8080/stock-prices".to_string(),
            topic: "/topic/stock-prices".to_string(),
            reconnect_delay: Duration::from_secs(5),
            tick_rate: Duration::from_millis(250),
            log_file: "tickerboard.log".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_does_not_read_the_environment() {
        let config = Config::default();

        assert_eq!(config.broker_url, "ws://127.0.0.1:8080/stock-prices");
        assert_eq!(config.topic, "/topic/stock-prices");
        assert_eq!(config.reconnect_delay, Duration::from_secs(5));
        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert_eq!(config.log_file, "tickerboard.log");
    }

    #[test]
    fn test_config_explicit_values() {
        let config = Config {
            broker_url: "ws://broker.local:9000/stock-prices".to_string(),
            topic: "/topic/stock-prices".to_string(),
            reconnect_delay: Duration::from_secs(5),
            tick_rate: Duration::from_millis(250),
            log_file: "tickerboard.log".to_string(),
        };

        assert!(config.broker_url.starts_with("ws://"));
        assert_eq!(config.topic, "/topic/stock-prices");
        assert_eq!(config.reconnect_delay, Duration::from_secs(5));
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            broker_url: "ws://test/feed".to_string(),
            topic: "/topic/test".to_string(),
            reconnect_delay: Duration::from_secs(1),
            tick_rate: Duration::from_millis(100),
            log_file: "test.log".to_string(),
        };

        let cloned = config.clone();
        assert_eq!(cloned.broker_url, config.broker_url);
        assert_eq!(cloned.topic, config.topic);
        assert_eq!(cloned.tick_rate, config.tick_rate);
    }
}
