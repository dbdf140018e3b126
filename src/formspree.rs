//! Relay of contact inquiries to the configured form-processing endpoint
//! (Formspree or any service with a compatible JSON API).

use crate::contact::Inquiry;

/// Why a relayed submission failed. The page collapses both variants into one
/// generic note; the split exists so the logs keep the upstream detail.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form endpoint returned {status}: {detail}")]
    Endpoint {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("failed to reach form endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// POST the inquiry as JSON to the configured endpoint.
///
/// Any 2xx response counts as delivered. A non-2xx response is reported with
/// whatever body text the endpoint produced; that detail is for diagnostics
/// only and is never rendered.
pub async fn submit_inquiry(
    client: &reqwest::Client,
    endpoint: &str,
    inquiry: &Inquiry,
) -> Result<(), SubmitError> {
    let response = client
        .post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .json(inquiry)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(SubmitError::Endpoint { status, detail });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn sample_inquiry() -> Inquiry {
        Inquiry {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            company: "Navy".to_string(),
            message: "Interested in ops automation.".to_string(),
        }
    }

    // ==================== Success Tests ====================

    #[tokio::test]
    async fn test_submit_posts_json_with_expected_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/xyz"))
            .and(header("Accept", "application/json"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "company": "Navy",
                "message": "Interested in ops automation.",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/f/xyz", mock_server.uri());
        let result = submit_inquiry(&client, &endpoint, &sample_inquiry()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_any_2xx_counts_as_delivered() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/xyz"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/f/xyz", mock_server.uri());

        assert!(submit_inquiry(&client, &endpoint, &sample_inquiry())
            .await
            .is_ok());
    }

    // ==================== Failure Tests ====================

    #[tokio::test]
    async fn test_non_2xx_keeps_status_and_body_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/xyz"))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/f/xyz", mock_server.uri());
        let err = submit_inquiry(&client, &endpoint, &sample_inquiry())
            .await
            .expect_err("should fail");

        match err {
            SubmitError::Endpoint { status, detail } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(detail, "quota exceeded");
            }
            other => panic!("expected endpoint error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) is never bound in the test environment.
        let client = reqwest::Client::new();
        let err = submit_inquiry(&client, "http://127.0.0.1:9/f/xyz", &sample_inquiry())
            .await
            .expect_err("should fail");

        assert!(matches!(err, SubmitError::Transport(_)));
    }

    #[tokio::test]
    async fn test_endpoint_error_display_includes_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/f/xyz"))
            .respond_with(ResponseTemplate::new(422).set_body_string("missing _replyto"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let endpoint = format!("{}/f/xyz", mock_server.uri());
        let err = submit_inquiry(&client, &endpoint, &sample_inquiry())
            .await
            .expect_err("should fail");

        let rendered = err.to_string();
        assert!(rendered.contains("422"));
        assert!(rendered.contains("missing _replyto"));
    }
}
