const API_BASE_URL: &str = "http://localhost:5000";

/// Invoices are recorded against this user until accounts exist.
const DEFAULT_USER_ID: i64 = 1;

#[derive(Clone, PartialEq, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_id: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl AppConfig {
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AppConfig {
            api_base_url: "http://localhost:5000/".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/inventory/reduce"), "http://localhost:5000/inventory/reduce");
        assert_eq!(AppConfig::default().endpoint("schemes"), "http://localhost:5000/schemes");
    }
}
