/// Where the smoke tests find a running backend.
#[derive(Debug)]
pub struct TestConfig {
    /// Base URL of the back-office API.
    pub base_url: String,
}

/// Read the backend location from `BACKOFFICE_BASE_URL`, falling back to
/// the development default.
pub fn load_config() -> TestConfig {
    let base_url = std::env::var("BACKOFFICE_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string());
    TestConfig { base_url }
}
