//! In-memory [`InstallsApi`] for tests

use super::{InstallsApi, PluginConfiguration};
use crate::error::{CloudError, CloudResult};
use crate::install::Installation;
use crate::store::ManualClock;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Serves a fixed installation list, or queued responses when present, and
/// records every call as `"<op>:<arg>"`.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub installs: Vec<Installation>,
    pub shared: Vec<Installation>,
    pub plugin: PluginConfiguration,
    queued: Mutex<VecDeque<CloudResult<Vec<Installation>>>>,
    calls: Mutex<Vec<String>>,
    clock: Option<(Arc<ManualClock>, i64)>,
}

impl FakeApi {
    pub fn with_installs(installs: Vec<Installation>) -> Self {
        Self {
            installs,
            ..Self::default()
        }
    }

    /// Queue a one-off answer for the next user lookup
    pub fn then(self, response: CloudResult<Vec<Installation>>) -> Self {
        self.queued.lock().unwrap().push_back(response);
        self
    }

    /// Move `clock` forward by `latency` ms on every user lookup
    pub fn with_latency(mut self, clock: Arc<ManualClock>, latency: i64) -> Self {
        self.clock = Some((clock, latency));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        let prefix = format!("{}:", op);
        self.calls()
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .count()
    }

    fn record(&self, op: &str, arg: &str) {
        self.calls.lock().unwrap().push(format!("{}:{}", op, arg));
    }

    fn known(&self, id: &str) -> CloudResult<()> {
        if self.installs.iter().chain(&self.shared).any(|i| i.id == id) {
            Ok(())
        } else {
            Err(CloudError::api(404, "installation not found"))
        }
    }
}

#[async_trait]
impl InstallsApi for FakeApi {
    async fn get_user_installs(&self, user_id: &str) -> CloudResult<Vec<Installation>> {
        self.record("user", user_id);
        if let Some((clock, latency)) = &self.clock {
            clock.advance(*latency);
        }
        match self.queued.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(self.installs.clone()),
        }
    }

    async fn get_shared_installs(&self) -> CloudResult<Vec<Installation>> {
        self.record("shared", "");
        Ok(self.shared.clone())
    }

    async fn deletion_lock_installation(&self, installation_id: &str) -> CloudResult<()> {
        self.record("lock", installation_id);
        self.known(installation_id)
    }

    async fn deletion_unlock_installation(&self, installation_id: &str) -> CloudResult<()> {
        self.record("unlock", installation_id);
        self.known(installation_id)
    }

    async fn restart_installation(&self, name: &str) -> CloudResult<()> {
        self.record("restart", name);
        Ok(())
    }

    async fn get_plugin_configuration(&self) -> CloudResult<PluginConfiguration> {
        self.record("config", "");
        Ok(self.plugin.clone())
    }
}
