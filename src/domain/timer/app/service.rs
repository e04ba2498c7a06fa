use std::sync::Arc;

use tokio::sync::watch::Receiver;

use crate::domain::entity::{TimerMode, TimerSnapshot};
use crate::domain::timer::inbound::{
    MutePort, QueryPort, QueryResponse, ResetPort, SelectModePort, ShutdownPort, TogglePort,
    WatchPort,
};
use crate::domain::timer::worker::WorkerHandle;

#[derive(Debug)]
pub struct ToggleService {
    worker: Arc<WorkerHandle>,
}

impl ToggleService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl TogglePort for ToggleService {
    async fn toggle(&self) {
        self.worker.toggle().await
    }
}

#[derive(Debug)]
pub struct ResetService {
    worker: Arc<WorkerHandle>,
}

impl ResetService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl ResetPort for ResetService {
    async fn reset(&self) {
        self.worker.reset().await
    }
}

#[derive(Debug)]
pub struct SelectModeService {
    worker: Arc<WorkerHandle>,
}

impl SelectModeService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl SelectModePort for SelectModeService {
    async fn select_mode(&self, mode: TimerMode) {
        self.worker.select_mode(mode).await
    }
}

#[derive(Debug)]
pub struct MuteService {
    worker: Arc<WorkerHandle>,
}

impl MuteService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl MutePort for MuteService {
    async fn toggle_mute(&self) {
        self.worker.toggle_mute().await
    }
}

#[derive(Debug)]
pub struct QueryService {
    worker: Arc<WorkerHandle>,
}

impl QueryService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl QueryPort for QueryService {
    async fn query(&self) -> QueryResponse {
        self.worker.query().await.into()
    }
}

#[derive(Debug)]
pub struct WatchService {
    worker: Arc<WorkerHandle>,
}

impl WatchService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

impl WatchPort for WatchService {
    fn watch(&self) -> Receiver<TimerSnapshot> {
        self.worker.watch()
    }
}

#[derive(Debug)]
pub struct ShutdownService {
    worker: Arc<WorkerHandle>,
}

impl ShutdownService {
    pub fn new(worker: Arc<WorkerHandle>) -> Self {
        Self { worker }
    }
}

#[async_trait::async_trait]
impl ShutdownPort for ShutdownService {
    async fn shutdown(&self) {
        self.worker.shutdown().await
    }
}
