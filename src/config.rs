#[derive(Debug, Clone)]
pub struct Config {
    // Contact form
    pub form_endpoint: Option<String>,
    pub contact_email: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // Form-processing endpoint. Unset or empty means no endpoint is
            // configured and submissions fall back to a mailto: compose link.
            form_endpoint: std::env::var("FORM_ENDPOINT")
                .ok()
                .filter(|v| !v.is_empty()),

            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@trochlear.ai".to_string()),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}
