//! Request builders for the posts resource.
//!
//! `PostsApi` only knows the collection URL; it turns validated form input
//! into immutable [`Request`] values and never touches the network.

use crate::constants::{DEFAULT_BASE_URL, FETCH_POST_ID, LEGACY_POST_ID};
use crate::models::{ExchangeStyle, HttpMethod, PostDraft, Request, ResponseBody};

#[derive(Debug, Clone)]
pub struct PostsApi {
    base_url: String,
}

impl Default for PostsApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PostsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// GET the first post, fetch-style
    pub fn fetch_post(&self) -> Request {
        Request::builder(HttpMethod::GET, self.item_url(FETCH_POST_ID)).build()
    }

    /// GET the second post, legacy-style
    pub fn fetch_post_legacy(&self) -> Request {
        Request::builder(HttpMethod::GET, self.item_url(LEGACY_POST_ID))
            .style(ExchangeStyle::Legacy)
            .build()
    }

    pub fn create_post(&self, draft: &PostDraft) -> serde_json::Result<Request> {
        Ok(Request::builder(HttpMethod::POST, self.base_url.clone())
            .json(draft)?
            .build())
    }

    pub fn update_post(&self, id: &str, draft: &PostDraft) -> serde_json::Result<Request> {
        Ok(Request::builder(HttpMethod::PUT, self.item_url(id))
            .json(draft)?
            .style(ExchangeStyle::Legacy)
            .build())
    }

    /// DELETE never looks at the response body
    pub fn delete_post(&self, id: &str) -> Request {
        Request::builder(HttpMethod::DELETE, self.item_url(id))
            .response_body(ResponseBody::Discard)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Header;
    use serde_json::json;

    fn api() -> PostsApi {
        PostsApi::new("http://localhost:3000/posts/")
    }

    #[test]
    fn test_fetch_requests() {
        let req = api().fetch_post();
        assert_eq!(req.method(), HttpMethod::GET);
        assert_eq!(req.url(), "http://localhost:3000/posts/1");
        assert_eq!(req.style(), ExchangeStyle::Fetch);

        let req = api().fetch_post_legacy();
        assert_eq!(req.url(), "http://localhost:3000/posts/2");
        assert_eq!(req.style(), ExchangeStyle::Legacy);
    }

    #[test]
    fn test_create_posts_to_collection_root() {
        let draft = PostDraft {
            title: "Hello".into(),
            body: "World".into(),
        };
        let req = api().create_post(&draft).unwrap();
        assert_eq!(req.method(), HttpMethod::POST);
        assert_eq!(req.url(), "http://localhost:3000/posts");
        assert_eq!(req.body(), Some(&json!({"title": "Hello", "body": "World"})));
        assert_eq!(
            req.headers(),
            &[Header::new("Content-Type", "application/json")]
        );
    }

    #[test]
    fn test_update_is_legacy_style() {
        let draft = PostDraft {
            title: "T".into(),
            body: "B".into(),
        };
        let req = api().update_post("7", &draft).unwrap();
        assert_eq!(req.method(), HttpMethod::PUT);
        assert_eq!(req.url(), "http://localhost:3000/posts/7");
        assert_eq!(req.style(), ExchangeStyle::Legacy);
        assert!(req.body().is_some());
    }

    #[test]
    fn test_delete_discards_body() {
        let req = api().delete_post("5");
        assert_eq!(req.method(), HttpMethod::DELETE);
        assert_eq!(req.url(), "http://localhost:3000/posts/5");
        assert_eq!(req.response_body(), ResponseBody::Discard);
        assert!(req.body().is_none());
    }

    #[test]
    fn test_default_points_at_public_api() {
        assert_eq!(
            PostsApi::default().fetch_post().url(),
            "https://jsonplaceholder.typicode.com/posts/1"
        );
    }
}
