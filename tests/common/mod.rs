#![allow(dead_code)]

use axum_test::TestServer;
use board_auth::core::AppState;
use board_auth::token::{StubTimeSource, TokenConfig};
use std::sync::Arc;

pub const TEST_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";
pub const ACCESS_TTL: i64 = 3600;
pub const T0: i64 = 1_700_000_000;

/// Configurazione dei token usata in tutti i test
pub fn test_config() -> TokenConfig {
    TokenConfig::new(TEST_SECRET).with_access_ttl(ACCESS_TTL)
}

/// Crea un AppState per i test con un orologio controllabile
///
/// # Returns
/// Lo stato e l'orologio, da far avanzare per simulare il passare del tempo
pub fn create_test_state() -> (Arc<AppState>, Arc<StubTimeSource>) {
    let time = Arc::new(StubTimeSource::new(T0));
    let state = Arc::new(AppState::new(&test_config(), time.clone()));
    (state, time)
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = board_auth::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
