//! Vault KV v2 implementation of [`SecretStore`]
//!
//! Speaks the plain HTTP API with a blocking `ureq` agent:
//!
//! - `GET {addr}/v1/{mount}/metadata{path}?list=true` lists a directory
//! - `GET {addr}/v1/{mount}/data{path}` reads a secret
//! - `GET {addr}/v1/sys/internal/ui/mounts` enumerates mounts
//!
//! Every request carries the token in `X-Vault-Token`.

use super::error::StoreError;
use super::{Entry, Result, Secret, SecretStore};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

const TOKEN_HEADER: &str = "X-Vault-Token";
const KV_MOUNT_TYPE: &str = "kv";

/// HTTP client for a Vault server
#[derive(Debug, Clone)]
pub struct VaultClient {
    addr: String,
    token: String,
    agent: ureq::Agent,
}

/// Raw HTTP response, independent of the status code
#[derive(Debug)]
struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

impl RawResponse {
    const fn is_ok(&self) -> bool {
        self.status == 200
    }

    fn status_line(&self) -> String {
        format!("{} {}", self.status, self.status_text)
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SecretResponse {
    #[serde(default)]
    data: Option<Secret>,
}

#[derive(Debug, Deserialize)]
struct MountsResponse {
    data: MountsData,
}

#[derive(Debug, Deserialize)]
struct MountsData {
    #[serde(default)]
    secret: BTreeMap<String, MountInfo>,
}

#[derive(Debug, Deserialize)]
struct MountInfo {
    #[serde(rename = "type", default)]
    kind: String,
}

impl VaultClient {
    /// Create a client for the server at `addr`
    ///
    /// `timeout` bounds every individual request.
    #[must_use]
    pub fn new(addr: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        let addr = addr.into().trim_end_matches('/').to_string();
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            addr,
            token: token.into(),
            agent,
        }
    }

    /// Server address without trailing slash
    #[must_use]
    pub fn addr(&self) -> &str {
        &self.addr
    }

    fn list_url(&self, mount: &str, path: &str) -> String {
        format!("{}/v1/{mount}/metadata{path}?list=true", self.addr)
    }

    fn data_url(&self, mount: &str, path: &str) -> String {
        format!("{}/v1/{mount}/data{path}", self.addr)
    }

    fn mounts_url(&self) -> String {
        format!("{}/v1/sys/internal/ui/mounts", self.addr)
    }

    /// Web UI address of a secret
    #[must_use]
    pub fn ui_url(&self, mount: &str, path: &str) -> String {
        format!("{}/ui/vault/secrets/{mount}/show{path}", self.addr)
    }

    /// Perform a GET and hand back the response whatever its status
    fn fetch(&self, url: &str) -> Result<RawResponse> {
        log::debug!("GET {url}");
        let response = match self
            .agent
            .get(url)
            .set(TOKEN_HEADER, &self.token)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(StoreError::request(url, transport));
            }
        };

        let status = response.status();
        let status_text = response.status_text().to_string();
        let body = response
            .into_string()
            .map_err(|e| StoreError::request(url, format!("failed to read response body: {e}")))?;

        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

/// Decode a directory listing response
fn decode_list(url: &str, path: &str, response: &RawResponse) -> Result<Vec<Entry>> {
    if response.status == 403 {
        return Err(StoreError::AccessDenied {
            path: path.to_string(),
        });
    }
    if !response.is_ok() {
        return Err(StoreError::request(url, response.status_line()));
    }

    let listing: ListResponse = serde_json::from_str(&response.body)
        .map_err(|e| StoreError::decode(url, format!("{e} in body {}", response.body)))?;

    Ok(listing.data.keys.into_iter().map(Entry::from_key).collect())
}

/// Decode a secret read response
///
/// A non-200 status is only an error when the body carries neither
/// `data` nor `metadata`. Vault answers 404 for soft-deleted secrets that
/// are still listed, and that body is still worth showing.
// Sharp edge: a secret whose schema legitimately has neither section is
// indistinguishable from a real error response here.
fn decode_secret(url: &str, response: &RawResponse) -> Result<Secret> {
    let decoded = serde_json::from_str::<SecretResponse>(&response.body);

    let secret = match decoded {
        Ok(body) => body.data.unwrap_or_default(),
        Err(_) if !response.is_ok() => {
            return Err(StoreError::request(url, response.status_line()));
        }
        Err(e) => {
            return Err(StoreError::decode(url, format!("{e} in body {}", response.body)));
        }
    };

    if !response.is_ok() && secret.is_empty() {
        return Err(StoreError::request(url, response.status_line()));
    }

    Ok(secret)
}

/// Decode the mount table, keeping key/value mounts only
fn decode_mounts(url: &str, response: &RawResponse) -> Result<Vec<String>> {
    if !response.is_ok() {
        return Err(StoreError::request(url, response.status_line()));
    }

    let mounts: MountsResponse = serde_json::from_str(&response.body)
        .map_err(|e| StoreError::decode(url, format!("{e} in body {}", response.body)))?;

    let mut names: Vec<String> = mounts
        .data
        .secret
        .into_iter()
        .filter(|(_, info)| info.kind == KV_MOUNT_TYPE)
        .map(|(name, _)| name.trim_end_matches('/').to_string())
        .collect();
    names.sort();
    Ok(names)
}

impl SecretStore for VaultClient {
    fn list(&self, mount: &str, path: &str) -> Result<Vec<Entry>> {
        let url = self.list_url(mount, path);
        let response = self.fetch(&url)?;
        decode_list(&url, path, &response)
    }

    fn get(&self, mount: &str, path: &str) -> Result<Secret> {
        let url = self.data_url(mount, path);
        let response = self.fetch(&url)?;
        decode_secret(&url, &response).map(|secret| secret.with_url(self.ui_url(mount, path)))
    }

    fn list_mounts(&self) -> Result<Vec<String>> {
        let url = self.mounts_url();
        let response = self.fetch(&url)?;
        decode_mounts(&url, &response)
    }
}
