use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    routes::apply_routes,
    services::here_client::here_service::{HereService, HereServiceConfig},
    types::app_state::AppState,
};

pub fn gen_app(here_config: HereServiceConfig) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        here_service: HereService::new(here_config),
    };

    apply_routes(Router::new())
        .route("/", get(liveness))
        .layer(cors_middleware)
        .with_state(state)
}

const LIVENESS_TEXT: &str = "hwg-gateway: geocode and route via HERE";

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub here_server: mockito::ServerGuard,
}

/// App wired to a local mock of the HERE endpoints.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let here_server = mockito::Server::new_async().await;

    let mut config = HereServiceConfig::new("test-id", "test-code");
    config.geocoder_url = format!("{}/6.2/geocode.json", here_server.url());
    config.routing_url = format!("{}/routing/7.2/calculateroute.json", here_server.url());
    config.map_url = format!("{}/mia/1.6/mapview", here_server.url());
    config.map_routing_url = format!("{}/mia/1.6/routing", here_server.url());

    MockApp {
        app: gen_app(config),
        here_server,
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
        http::StatusCode,
    };
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn liveness_names_the_service() {
        let app = gen_app(HereServiceConfig::new("id", "code"));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], LIVENESS_TEXT.as_bytes());
    }
}
