use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::*;

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) async fn ensure_ok(
        &self,
        resp: reqwest::Response,
        label: &str,
    ) -> Result<reqwest::Response, RequestError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = error_body_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_lowercase()
        });
        warn!(status = status.as_u16(), %label, %message, "admin api error");
        Err(RequestError::status(
            status.as_u16(),
            format!("{}: {}", label, message),
        ))
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        label: &str,
    ) -> Result<T, RequestError> {
        debug!(method = "GET", %path, "admin api request");
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| transport_error(label, err))?;
        let resp = self.ensure_ok(resp, label).await?;
        resp.json().await.map_err(|err| decode_error(label, err))
    }

    pub(super) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        label: &str,
    ) -> Result<T, RequestError> {
        debug!(method = "POST", %path, "admin api request");
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| transport_error(label, err))?;
        let resp = self.ensure_ok(resp, label).await?;
        resp.json().await.map_err(|err| decode_error(label, err))
    }

    pub(super) async fn delete(&self, path: &str, label: &str) -> Result<(), RequestError> {
        debug!(method = "DELETE", %path, "admin api request");
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(|err| transport_error(label, err))?;
        self.ensure_ok(resp, label).await?;
        Ok(())
    }
}

pub(super) fn transport_error(label: &str, err: reqwest::Error) -> RequestError {
    warn!(%label, error = %err, "admin api unreachable");
    RequestError::transport(format!("{}: {}", label, err))
}

pub(super) fn decode_error(label: &str, err: reqwest::Error) -> RequestError {
    RequestError::transport(format!("{}: parse response: {}", label, err))
}

/// Pull a human message out of an error body. The admin API answers errors
/// with `{"error": "..."}`; some proxies send `{"message": "..."}` or text.
pub(super) fn error_body_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(v) => ["error", "message"]
            .iter()
            .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
            .map(|m| m.to_string()),
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
