//! HTTP client wrapper - executes requests and normalizes their outcome

use reqwest::StatusCode;

use crate::models::{ExchangeStyle, FailureCategory, HttpMethod, Outcome, Request, ResponseBody};

/// Prefix a browser fetch puts in front of transport failures
const FETCH_NETWORK_ERROR: &str = "NetworkError when attempting to fetch resource";

/// Build a reqwest request from the given description
fn build_request(client: &reqwest::Client, request: &Request) -> reqwest::RequestBuilder {
    let url = request.url();
    let mut req_builder = match request.method() {
        HttpMethod::GET => client.get(url),
        HttpMethod::POST => client.post(url),
        HttpMethod::PUT => client.put(url),
        HttpMethod::DELETE => client.delete(url),
    };

    for header in request.headers() {
        req_builder = req_builder.header(&header.key, &header.value);
    }

    if let Some(body) = request.body() {
        req_builder = req_builder.json(body);
    }

    req_builder
}

/// Execute one exchange and classify it.
///
/// Never fails: transport, status and decode problems all come back as
/// `Outcome::Failure`.
pub async fn execute(client: &reqwest::Client, request: &Request) -> Outcome {
    let response = match build_request(client, request).send().await {
        Ok(resp) => resp,
        Err(e) => return network_failure(request.style(), &e),
    };

    let status = response.status();
    if let Some(failure) = classify_status(request.style(), status) {
        return failure;
    }

    match request.response_body() {
        ResponseBody::Discard => Outcome::Success {
            status_code: status.as_u16(),
            decoded_body: serde_json::Value::Null,
        },
        ResponseBody::Json => match response.text().await {
            Ok(body) => decode_body(status.as_u16(), &body),
            Err(e) => network_failure(request.style(), &e),
        },
    }
}

fn network_failure(style: ExchangeStyle, error: &reqwest::Error) -> Outcome {
    let message = match style {
        ExchangeStyle::Fetch => format!("{}: {}", FETCH_NETWORK_ERROR, error),
        ExchangeStyle::Legacy => error.to_string(),
    };
    Outcome::failure(FailureCategory::Network, message)
}

/// Returns the failure for a status outside 200..=299, `None` otherwise
pub fn classify_status(style: ExchangeStyle, status: StatusCode) -> Option<Outcome> {
    if status.is_success() {
        return None;
    }
    let message = match style {
        ExchangeStyle::Fetch => format!("HTTP error! status: {}", status.as_u16()),
        ExchangeStyle::Legacy => status.canonical_reason().unwrap_or_default().to_string(),
    };
    Some(Outcome::failure(FailureCategory::HttpStatus, message))
}

/// Decode a successful response body
pub fn decode_body(status_code: u16, body: &str) -> Outcome {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(decoded_body) => Outcome::Success {
            status_code,
            decoded_body,
        },
        Err(e) => Outcome::failure(FailureCategory::Parse, e.to_string()),
    }
}

/// Create an HTTP client with default configuration.
///
/// No timeout is set: a hung exchange stays in flight until the transport
/// gives up.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_status_message() {
        let outcome = classify_status(ExchangeStyle::Fetch, StatusCode::NOT_FOUND).unwrap();
        assert_eq!(
            outcome,
            Outcome::failure(FailureCategory::HttpStatus, "HTTP error! status: 404")
        );
    }

    #[test]
    fn test_legacy_status_message_is_status_text() {
        let outcome = classify_status(ExchangeStyle::Legacy, StatusCode::NOT_FOUND).unwrap();
        assert_eq!(outcome, Outcome::failure(FailureCategory::HttpStatus, "Not Found"));

        let outcome =
            classify_status(ExchangeStyle::Legacy, StatusCode::INTERNAL_SERVER_ERROR).unwrap();
        assert_eq!(
            outcome,
            Outcome::failure(FailureCategory::HttpStatus, "Internal Server Error")
        );
    }

    #[test]
    fn test_success_range_is_inclusive() {
        assert!(classify_status(ExchangeStyle::Fetch, StatusCode::OK).is_none());
        assert!(classify_status(ExchangeStyle::Fetch, StatusCode::CREATED).is_none());
        let edge = StatusCode::from_u16(299).unwrap();
        assert!(classify_status(ExchangeStyle::Legacy, edge).is_none());
        assert!(classify_status(ExchangeStyle::Fetch, StatusCode::MULTIPLE_CHOICES).is_some());
        assert!(classify_status(ExchangeStyle::Fetch, StatusCode::NO_CONTENT).is_none());
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(
            decode_body(200, r#"{"title":"T","body":"B"}"#),
            Outcome::Success {
                status_code: 200,
                decoded_body: json!({"title": "T", "body": "B"}),
            }
        );

        let outcome = decode_body(200, "<html>not json</html>");
        assert_eq!(outcome.category(), Some(FailureCategory::Parse));
    }
}
