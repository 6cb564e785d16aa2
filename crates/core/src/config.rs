//! Client connection settings.

/// Settings shared by the data-access clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API base URL, stored without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self { api_url }
    }

    /// Join a path fragment onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ClientConfig::new("http://localhost:5000/api/");
        assert_eq!(
            config.endpoint("/records"),
            "http://localhost:5000/api/records"
        );
        assert_eq!(
            config.endpoint("groups/7"),
            "http://localhost:5000/api/groups/7"
        );
    }
}
