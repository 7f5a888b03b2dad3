use serde::{Deserialize, Serialize};

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// How an exchange reports a bad status.
///
/// `Fetch` synthesizes `HTTP error! status: <code>`; `Legacy` hands back the
/// transport's own status text, the way an XHR-style `statusText` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangeStyle {
    Fetch,
    Legacy,
}

/// What to do with a successful response body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// Decode as JSON; a decode failure is an `Outcome::Failure`
    Json,
    /// Never read; the outcome carries `null`
    Discard,
}

/// A single HTTP exchange description.
///
/// Fields are private: once built, a request is only ever read.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: HttpMethod,
    url: String,
    headers: Vec<Header>,
    body: Option<serde_json::Value>,
    style: ExchangeStyle,
    response_body: ResponseBody,
}

impl Request {
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            style: ExchangeStyle::Fetch,
            response_body: ResponseBody::Json,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn style(&self) -> ExchangeStyle {
        self.style
    }

    pub fn response_body(&self) -> ResponseBody {
        self.response_body
    }
}

/// Consuming builder for [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    url: String,
    headers: Vec<Header>,
    body: Option<serde_json::Value>,
    style: ExchangeStyle,
    response_body: ResponseBody,
}

impl RequestBuilder {
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(key, value));
        self
    }

    /// Attach a JSON body along with its `Content-Type` header
    pub fn json<T: Serialize>(mut self, body: &T) -> serde_json::Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        let has_content_type = self
            .headers
            .iter()
            .any(|h| h.key.eq_ignore_ascii_case("content-type"));
        if !has_content_type {
            self.headers.push(Header::new("Content-Type", "application/json"));
        }
        Ok(self)
    }

    pub fn style(mut self, style: ExchangeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn response_body(mut self, response_body: ResponseBody) -> Self {
        self.response_body = response_body;
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            style: self.style,
            response_body: self.response_body,
        }
    }
}

/// Where an exchange failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCategory {
    /// Transport could not complete the exchange
    Network,
    /// Exchange completed with a status outside 200..=299
    HttpStatus,
    /// Body was not valid JSON
    Parse,
}

impl FailureCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::Network => "network",
            FailureCategory::HttpStatus => "http-status",
            FailureCategory::Parse => "parse",
        }
    }
}

/// Result of one HTTP exchange
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success {
        status_code: u16,
        decoded_body: serde_json::Value,
    },
    Failure {
        category: FailureCategory,
        message: String,
    },
}

impl Outcome {
    pub fn failure(category: FailureCategory, message: impl Into<String>) -> Self {
        Outcome::Failure {
            category,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn category(&self) -> Option<FailureCategory> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure { category, .. } => Some(*category),
        }
    }
}

/// A post as served by the API
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,
    pub title: String,
    pub body: String,
}

/// Payload for create and update
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

/// The five canned actions.
///
/// Carries whatever the output needs to describe the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FetchPost,
    FetchPostLegacy,
    CreatePost,
    UpdatePost,
    DeletePost { id: String },
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::FetchPost => "Fetch post",
            Action::FetchPostLegacy => "Fetch post (legacy)",
            Action::CreatePost => "Create post",
            Action::UpdatePost => "Update post",
            Action::DeletePost { .. } => "Delete post",
        }
    }
}

/// Response metadata kept for the status line
#[derive(Clone, Debug)]
pub struct Exchange {
    pub method: HttpMethod,
    pub url: String,
    pub status_code: Option<u16>,
    pub time_ms: u64,
}
