//! Blocking `ureq` transport for [`InstallsApi`], driven from tokio

use super::{InstallationIdRequest, InstallationNameRequest, InstallsApi, PluginConfiguration};
use crate::config::Config;
use crate::error::{CloudError, CloudResult};
use crate::install::Installation;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use ureq::{Agent, RequestBuilder};

/// HTTP client for the cloud plugin routes
#[derive(Clone)]
pub struct HttpClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

/// A request handed to the blocking pool
struct Outgoing {
    url: String,
    query: Vec<(&'static str, String)>,
    body: Option<String>,
    token: Option<String>,
}

impl HttpClient {
    /// Create a client for the plugin mounted at `plugin_id` on `server_url`
    pub fn new(
        server_url: &str,
        plugin_id: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: format!(
                "{}/plugins/{}/api/v1",
                server_url.trim_end_matches('/'),
                plugin_id
            ),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Build a client from the `[server]` config section
    pub fn from_config(config: &Config) -> CloudResult<Self> {
        config.validate_server()?;
        let server = &config.server;

        Ok(Self::new(
            &server.url,
            &server.plugin_id,
            Some(server.token.clone()),
            Duration::from_secs(server.timeout_secs),
        ))
    }

    /// Base URL every route is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn outgoing(&self, path: &str) -> Outgoing {
        Outgoing {
            url: format!("{}/{}", self.base_url, path),
            query: Vec::new(),
            body: None,
            token: self.token.clone(),
        }
    }

    async fn execute(&self, request: Outgoing) -> CloudResult<String> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|e| CloudError::Internal(format!("HTTP task failed: {}", e)))?
    }

    async fn get_json<T: DeserializeOwned>(&self, request: Outgoing) -> CloudResult<T> {
        let text = self.execute(request).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_installs(&self, request: Outgoing) -> CloudResult<Vec<Installation>> {
        let installs: Option<Vec<Installation>> = self.get_json(request).await?;
        Ok(installs.unwrap_or_default())
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> CloudResult<()> {
        let mut request = self.outgoing(path);
        request.body = Some(serde_json::to_string(body)?);
        self.execute(request).await.map(|_| ())
    }
}

#[async_trait]
impl InstallsApi for HttpClient {
    async fn get_user_installs(&self, user_id: &str) -> CloudResult<Vec<Installation>> {
        let mut request = self.outgoing("userinstalls");
        request.query.push(("user_id", user_id.to_string()));
        self.get_installs(request).await
    }

    async fn get_shared_installs(&self) -> CloudResult<Vec<Installation>> {
        self.get_installs(self.outgoing("sharedinstalls")).await
    }

    async fn deletion_lock_installation(&self, installation_id: &str) -> CloudResult<()> {
        self.post_json("deletionlock", &InstallationIdRequest { installation_id })
            .await
    }

    async fn deletion_unlock_installation(&self, installation_id: &str) -> CloudResult<()> {
        self.post_json("deletionunlock", &InstallationIdRequest { installation_id })
            .await
    }

    async fn restart_installation(&self, name: &str) -> CloudResult<()> {
        self.post_json(
            "restart",
            &InstallationNameRequest {
                installation_name: name,
            },
        )
        .await
    }

    async fn get_plugin_configuration(&self) -> CloudResult<PluginConfiguration> {
        self.get_json(self.outgoing("config")).await
    }
}

fn send_blocking(agent: &Agent, request: Outgoing) -> CloudResult<String> {
    let Outgoing {
        url,
        query,
        body,
        token,
    } = request;

    let mut response = match body {
        None => {
            debug!("GET {}", url);
            with_headers(agent.get(&url), &query, token.as_deref()).call()?
        }
        Some(body) => {
            debug!("POST {}", url);
            with_headers(agent.post(&url), &query, token.as_deref())
                .header("Content-Type", "application/json")
                .send(body.as_bytes())?
        }
    };

    let status = response.status();
    let text = response.body_mut().read_to_string()?;
    debug!("{} -> {}", url, status.as_u16());

    if !status.is_success() {
        let fallback = status.canonical_reason().unwrap_or("request failed");
        return Err(CloudError::api(
            status.as_u16(),
            error_message(&text).unwrap_or_else(|| fallback.to_string()),
        ));
    }

    Ok(text)
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    query: &[(&'static str, String)],
    token: Option<&str>,
) -> RequestBuilder<B> {
    builder = builder
        .header("X-Requested-With", "XMLHttpRequest")
        .header("X-Timezone-Offset", timezone_offset_minutes().to_string())
        .header("Accept", "application/json");

    for (key, value) in query {
        builder = builder.query(*key, value);
    }

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    builder
}

/// Minutes west of UTC, the convention browsers use
fn timezone_offset_minutes() -> i32 {
    -(chrono::Local::now().offset().local_minus_utc() / 60)
}

/// Pull a readable message out of an error body.
///
/// The plugin answers with plain `http.Error` text; the server itself with
/// JSON carrying `message` or `error`.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(msg) = ["message", "error"]
            .iter()
            .find_map(|k| value.get(k).and_then(|v| v.as_str()))
        {
            return Some(msg.to_string());
        }
    }

    Some(trimmed.to_string())
}
