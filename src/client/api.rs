use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with an error body.
    #[error("{0}")]
    Api(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub message: String,
    #[serde(with = "crate::models::flag")]
    pub is_active: bool,
}

/// Thin JSON client for the `/api` routes.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` points at the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        handle_response(response).await
    }

    pub async fn search<T: DeserializeOwned>(&self, path: &str, term: &str) -> Result<Vec<T>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("{}/search", path)))
            .query(&[("query", term)])
            .send()
            .await?;
        handle_response(response).await
    }

    pub async fn create<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        id: i64,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send_json(Method::PUT, &format!("{}/{}", path, id), body).await
    }

    pub async fn delete(&self, path: &str, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(&format!("{}/{}", path, id))).send().await?;
        handle_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    pub async fn toggle_teacher_status(&self, id: i64) -> Result<StatusUpdate, ClientError> {
        let response = self
            .client
            .patch(self.url(&format!("teachers/{}/toggle", id)))
            .send()
            .await?;
        handle_response(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self.client.request(method, self.url(path)).json(body).send().await?;
        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Error: {}", status.as_u16()));
    Err(ClientError::Api(message))
}
