//! HTTP surface: routes, handlers, and the submission strategy.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::contact::{Inquiry, SubmissionState};
use crate::formspree;
use crate::i18n::Language;
use crate::mailto;
use crate::prefs;
use crate::site;

/// How inquiries leave the site. Decided once at startup from the config, so
/// request handling never re-inspects the environment.
pub enum Submitter {
    /// POST the inquiry as JSON to the configured endpoint.
    Relay {
        endpoint: String,
        client: reqwest::Client,
    },
    /// No endpoint configured: hand the visitor a pre-filled mail compose link.
    Mailto { address: String },
}

impl Submitter {
    pub fn from_config(config: &Config) -> Submitter {
        match &config.form_endpoint {
            Some(endpoint) => Submitter::Relay {
                endpoint: endpoint.clone(),
                client: reqwest::Client::new(),
            },
            None => Submitter::Mailto {
                address: config.contact_email.clone(),
            },
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub submitter: Submitter,
}

/// Build the router with all routes and middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/contact", post(submit_contact))
        .route("/language", post(set_language))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn home(headers: HeaderMap) -> Html<String> {
    let lang = current_language(&headers);

    Html(site::render_home(
        lang,
        SubmissionState::Idle,
        &Inquiry::default(),
    ))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(inquiry): Form<Inquiry>,
) -> Response {
    let lang = current_language(&headers);

    match &state.submitter {
        Submitter::Relay { endpoint, client } => {
            info!("Relaying contact inquiry from {}", inquiry.email);

            match formspree::submit_inquiry(client, endpoint, &inquiry).await {
                Ok(()) => {
                    info!("Contact inquiry delivered for {}", inquiry.email);
                    let page = site::render_home(lang, SubmissionState::Success, &Inquiry::default());
                    Html(page).into_response()
                }
                Err(e) => {
                    // Full detail goes to the logs; the page only carries the
                    // fixed note, with the visitor's input kept in the fields.
                    warn!("Contact inquiry failed: {}", e);
                    let page = site::render_home(lang, SubmissionState::Error, &inquiry);
                    Html(page).into_response()
                }
            }
        }
        Submitter::Mailto { address } => {
            Redirect::to(&mailto::compose_url(address, &inquiry)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
struct LanguagePick {
    lang: String,
}

/// Remember the visitor's language and send them back to the page.
///
/// Codes are stored verbatim so the selector can grow without a redeploy;
/// values that cannot live in a cookie are skipped and the redirect still
/// happens.
async fn set_language(Form(pick): Form<LanguagePick>) -> Response {
    let mut response = Redirect::to("/").into_response();

    match prefs::remember_language(&pick.lang) {
        Some(cookie) => {
            response.headers_mut().insert(SET_COOKIE, cookie);
        }
        None => {
            warn!("Language choice {:?} could not be stored", pick.lang);
        }
    }

    response
}

async fn healthz() -> &'static str {
    "ok"
}

/// Resolve the language to render with: the stored preference if it names a
/// language the registry knows, the canonical language otherwise.
fn current_language(headers: &HeaderMap) -> Language {
    prefs::stored_language(headers)
        .and_then(|code| Language::from_code(&code).ok())
        .unwrap_or_else(Language::canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use axum::http::HeaderValue;

    // ==================== Submitter Selection Tests ====================

    #[test]
    fn test_relay_selected_when_endpoint_configured() {
        let config = Config {
            form_endpoint: Some("https://formspree.io/f/abc123".to_string()),
            contact_email: "hello@trochlear.ai".to_string(),
            port: 8080,
        };

        let submitter = Submitter::from_config(&config);
        assert!(matches!(
            submitter,
            Submitter::Relay { ref endpoint, .. } if endpoint == "https://formspree.io/f/abc123"
        ));
    }

    #[test]
    fn test_mailto_selected_without_endpoint() {
        let config = Config {
            form_endpoint: None,
            contact_email: "hello@trochlear.ai".to_string(),
            port: 8080,
        };

        let submitter = Submitter::from_config(&config);
        assert!(matches!(
            submitter,
            Submitter::Mailto { ref address } if address == "hello@trochlear.ai"
        ));
    }

    // ==================== current_language Tests ====================

    #[test]
    fn test_current_language_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("lang=de"));

        assert_eq!(current_language(&headers).code(), "de");
    }

    #[test]
    fn test_current_language_defaults_to_canonical() {
        assert_eq!(current_language(&HeaderMap::new()).code(), "en");
    }

    #[test]
    fn test_current_language_unknown_code_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("lang=klingon"));

        assert_eq!(current_language(&headers).code(), "en");
    }
}
