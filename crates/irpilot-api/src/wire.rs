//! Request and response shapes for the device API.
//!
//! Field names follow the device's camelCase JSON convention.

use irpilot_core::{ButtonId, Remote, RemoteId};
use serde::{Deserialize, Serialize};

/// Response of `GET /api/remotes`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotesResponse {
    #[serde(default)]
    pub remotes: Vec<Remote>,
}

/// Error response convention: `{"error": "..."}` on any status >= 400.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /api/remote/add`.
#[derive(Debug, Clone, Serialize)]
pub struct AddRemoteBody<'a> {
    pub name: &'a str,
}

/// Body of `POST /api/remote/delete`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRefBody {
    pub remote_id: RemoteId,
}

/// Body of `POST /api/button/add`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddButtonBody<'a> {
    pub remote_id: RemoteId,
    pub name: &'a str,
}

/// Body of `POST /api/button/edit`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditButtonBody<'a> {
    pub remote_id: RemoteId,
    pub button_id: ButtonId,
    pub name: &'a str,
}

/// Body of button-scoped endpoints: delete, send signal, start capture.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonRefBody {
    pub remote_id: RemoteId,
    pub button_id: ButtonId,
}
