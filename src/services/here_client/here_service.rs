use std::env;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::here_service_error::HereServiceError;

pub const DEFAULT_GEOCODER_URL: &str = "https://geocoder.api.here.com/6.2/geocode.json";
pub const DEFAULT_ROUTING_URL: &str = "https://route.api.here.com/routing/7.2/calculateroute.json";
pub const DEFAULT_MAP_URL: &str = "https://image.maps.api.here.com/mia/1.6/mapview";
pub const DEFAULT_MAP_ROUTING_URL: &str = "https://image.maps.api.here.com/mia/1.6/routing";

#[derive(Clone, Debug)]
pub struct HereServiceConfig {
    pub app_id: String,
    pub app_code: String,
    pub geocoder_url: String,
    pub routing_url: String,
    pub map_url: String,
    pub map_routing_url: String,
}

impl HereServiceConfig {
    /// Config pointing at the public HERE endpoints.
    pub fn new(app_id: impl Into<String>, app_code: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_code: app_code.into(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            routing_url: DEFAULT_ROUTING_URL.to_string(),
            map_url: DEFAULT_MAP_URL.to_string(),
            map_routing_url: DEFAULT_MAP_ROUTING_URL.to_string(),
        }
    }

    /// Reads `HERE_APP_ID` and `HERE_APP_CODE`, plus optional
    /// `HERE_GEOCODER_URL`, `HERE_ROUTING_URL`, `HERE_MAP_URL` and
    /// `HERE_MAP_ROUTING_URL` overrides.
    pub fn from_env() -> Result<Self, HereServiceError> {
        let required = |name: &str| {
            env::var(name).map_err(|_| HereServiceError::Config(format!("{} is not set", name)))
        };

        let mut config = Self::new(required("HERE_APP_ID")?, required("HERE_APP_CODE")?);

        if let Ok(url) = env::var("HERE_GEOCODER_URL") {
            config.geocoder_url = url;
        }
        if let Ok(url) = env::var("HERE_ROUTING_URL") {
            config.routing_url = url;
        }
        if let Ok(url) = env::var("HERE_MAP_URL") {
            config.map_url = url;
        }
        if let Ok(url) = env::var("HERE_MAP_ROUTING_URL") {
            config.map_routing_url = url;
        }

        Ok(config)
    }

    /// `{base}?app_id=..&app_code=..`, the prefix shared by every request.
    pub(crate) fn authenticated_url(&self, base: &str) -> String {
        format!("{}?app_id={}&app_code={}", base, self.app_id, self.app_code)
    }
}

#[derive(Clone)]
pub struct HereService {
    config: HereServiceConfig,
    client: reqwest::Client,
}

impl HereService {
    pub fn new(config: HereServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &HereServiceConfig {
        &self.config
    }

    /// Runs a single GET against the HERE API and decodes the JSON body.
    pub(crate) async fn run_request<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, HereServiceError> {
        // The query string carries the credentials, keep it out of the logs.
        debug!("GET {}", url.split('?').next().unwrap_or_default());

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_url_prefixes_credentials() {
        let config = HereServiceConfig::new("id", "code");

        assert_eq!(
            config.authenticated_url(DEFAULT_MAP_URL),
            "https://image.maps.api.here.com/mia/1.6/mapview?app_id=id&app_code=code"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/broken.json")
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let service = HereService::new(HereServiceConfig::new("id", "code"));
        let result = service
            .run_request::<serde_json::Value>(&format!("{}/broken.json", server.url()))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(HereServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn error_status_is_a_request_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/denied.json")
            .with_status(401)
            .with_body("{}")
            .create_async()
            .await;

        let service = HereService::new(HereServiceConfig::new("id", "code"));
        let result = service
            .run_request::<serde_json::Value>(&format!("{}/denied.json", server.url()))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(HereServiceError::Request(_))));
    }
}
