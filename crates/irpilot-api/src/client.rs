//! Typed async client for the IR learning device.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use url::Url;

use irpilot_core::{ButtonId, Remote, RemoteId};

use crate::error::{self, ApiError, ApiResult};
use crate::wire::{
    AddButtonBody, AddRemoteBody, ButtonRefBody, EditButtonBody, RemoteRefBody, RemotesResponse,
};

/// HTTP client for the device API.
///
/// Cheap to clone (shares the underlying connection pool); background tasks
/// each hold their own clone. No request timeout or retry policy is applied:
/// a hung request leaves that one operation pending, by design.
#[derive(Debug, Clone)]
pub struct DeviceClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeviceClient {
    /// Create a client for a device at the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        debug!("GET {}", path);
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<serde_json::Value> {
        debug!("POST {}", path);
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn post_empty(&self, path: &str) -> ApiResult<serde_json::Value> {
        debug!("POST {}", path);
        let response = self
            .http
            .post(self.endpoint(path))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> ApiResult<R> {
        let status = response.status().as_u16();
        if status >= 400 {
            let body = response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: error::status_message(status, &body),
            });
        }
        response.json::<R>().await.map_err(ApiError::Decode)
    }

    /// Fetch the full remote list. The caller replaces its mirror wholesale.
    pub async fn list_remotes(&self) -> ApiResult<Vec<Remote>> {
        let response: RemotesResponse = self.get_json("/api/remotes").await?;
        Ok(response.remotes)
    }

    /// Create a new remote.
    pub async fn add_remote(&self, name: &str) -> ApiResult<()> {
        self.post("/api/remote/add", &AddRemoteBody { name })
            .await
            .map(|_| ())
    }

    /// Delete a remote and all its buttons.
    pub async fn delete_remote(&self, remote_id: RemoteId) -> ApiResult<()> {
        self.post("/api/remote/delete", &RemoteRefBody { remote_id })
            .await
            .map(|_| ())
    }

    /// Create a new button on a remote.
    pub async fn add_button(&self, remote_id: RemoteId, name: &str) -> ApiResult<()> {
        self.post("/api/button/add", &AddButtonBody { remote_id, name })
            .await
            .map(|_| ())
    }

    /// Rename a button.
    pub async fn edit_button(
        &self,
        remote_id: RemoteId,
        button_id: ButtonId,
        name: &str,
    ) -> ApiResult<()> {
        self.post(
            "/api/button/edit",
            &EditButtonBody {
                remote_id,
                button_id,
                name,
            },
        )
        .await
        .map(|_| ())
    }

    /// Delete a button.
    pub async fn delete_button(&self, remote_id: RemoteId, button_id: ButtonId) -> ApiResult<()> {
        self.post(
            "/api/button/delete",
            &ButtonRefBody {
                remote_id,
                button_id,
            },
        )
        .await
        .map(|_| ())
    }

    /// Replay the captured signal of a button.
    pub async fn send_signal(&self, remote_id: RemoteId, button_id: ButtonId) -> ApiResult<()> {
        self.post(
            "/api/signal/send",
            &ButtonRefBody {
                remote_id,
                button_id,
            },
        )
        .await
        .map(|_| ())
    }

    /// Put the device into capture mode for a button.
    pub async fn start_capture(&self, remote_id: RemoteId, button_id: ButtonId) -> ApiResult<()> {
        self.post(
            "/api/record/start",
            &ButtonRefBody {
                remote_id,
                button_id,
            },
        )
        .await
        .map(|_| ())
    }

    /// Take the device out of capture mode.
    ///
    /// Idempotent on the device side: the device tolerates a stop after the
    /// capture already finished, so cleanup paths may always call this.
    pub async fn stop_capture(&self) -> ApiResult<()> {
        self.post_empty("/api/record/stop").await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = DeviceClient::new(Url::parse("http://192.168.4.1").unwrap());
        assert_eq!(
            client.endpoint("/api/remotes"),
            "http://192.168.4.1/api/remotes"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = DeviceClient::new(Url::parse("http://device.local:8080/").unwrap());
        assert_eq!(
            client.endpoint("/api/record/stop"),
            "http://device.local:8080/api/record/stop"
        );
    }
}
