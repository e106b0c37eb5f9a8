use crate::config::Config;
use crate::errors::LikeError;
use crate::models::{CafeId, LikeRequest, LikeStatusResponse};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE},
    Client, Response,
};
use serde_json::Value;
use tracing::debug;

pub const LIKES_PATH: &str = "/api/likes";
pub const UNLIKE_PATH: &str = "/api/unlike";

#[async_trait]
pub trait LikesApi: Send + Sync {
    async fn like_status(&self, cafe_id: &CafeId) -> Result<bool, LikeError>;

    async fn like(&self, cafe_id: &CafeId) -> Result<Value, LikeError>;

    async fn unlike(&self, cafe_id: &CafeId) -> Result<Value, LikeError>;
}

#[derive(Clone)]
pub struct HttpLikesClient {
    base_url: String,
    client: Client,
}

impl HttpLikesClient {
    pub fn new(config: &Config) -> Result<Self, LikeError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = config.session_cookie.as_deref() {
            let value = HeaderValue::from_str(cookie)
                .map_err(|err| LikeError::InvalidConfig(format!("session cookie: {err}")))?;
            headers.insert(COOKIE, value);
        }

        let mut builder = Client::builder()
            .cookie_store(true)
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_mutation(&self, path: &str, cafe_id: &CafeId) -> Result<Value, LikeError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(&LikeRequest {
                cafe_id: cafe_id.clone(),
            })
            .send()
            .await?;

        let body = read_opaque(resp).await?;
        debug!(%path, %body, "mutation response");

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(LikeError::NotLoggedIn(message.to_string()));
        }
        Ok(body)
    }
}

#[async_trait]
impl LikesApi for HttpLikesClient {
    async fn like_status(&self, cafe_id: &CafeId) -> Result<bool, LikeError> {
        let resp = self
            .client
            .get(self.url(LIKES_PATH))
            .query(&[("cafe_id", cafe_id.as_str())])
            .send()
            .await?;

        let status: LikeStatusResponse = read_json(resp).await?;
        debug!(%cafe_id, ?status, "like status");

        if let Some(message) = status.error {
            return Err(LikeError::NotLoggedIn(message));
        }
        status
            .likes
            .ok_or_else(|| LikeError::UnexpectedBody("missing boolean `likes` field".into()))
    }

    async fn like(&self, cafe_id: &CafeId) -> Result<Value, LikeError> {
        debug!(%cafe_id, "like");
        self.post_mutation(LIKES_PATH, cafe_id).await
    }

    async fn unlike(&self, cafe_id: &CafeId) -> Result<Value, LikeError> {
        debug!(%cafe_id, "unlike");
        self.post_mutation(UNLIKE_PATH, cafe_id).await
    }
}

async fn ensure_success(resp: Response) -> Result<Response, LikeError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LikeError::status(status, body));
    }
    Ok(resp)
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, LikeError> {
    let bytes = ensure_success(resp).await?.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|err| LikeError::UnexpectedBody(err.to_string()))
}

// Mutation bodies are opaque: an empty body is `Null`, anything that is not
// JSON comes back as a string.
async fn read_opaque(resp: Response) -> Result<Value, LikeError> {
    let text = ensure_success(resp).await?.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(_) => Ok(Value::String(text)),
    }
}
