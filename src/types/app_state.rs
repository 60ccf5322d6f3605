use crate::services::here_client::here_service::HereService;

#[derive(Clone)]
pub struct AppState {
    pub here_service: HereService,
}
