use axum::{body::Bytes, extract::FromRef};
use std::sync::Arc;
use std::time::Instant;

use crate::dashboard::Dashboard;
use crate::dataset::ChartDatasetProvider;

use super::ServerConfig;

pub type GuardedDatasets = Arc<ChartDatasetProvider>;
pub type GuardedDashboard = Arc<Dashboard>;
/// The dashboard page, rendered once at startup.
pub type RenderedPage = Bytes;

/// Everything the handlers read. Built once at startup and never mutated,
/// so it is shared without locks.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub datasets: GuardedDatasets,
    pub dashboard: GuardedDashboard,
    pub page: RenderedPage,
    pub version: String,
}

impl FromRef<ServerState> for GuardedDatasets {
    fn from_ref(input: &ServerState) -> Self {
        input.datasets.clone()
    }
}

impl FromRef<ServerState> for GuardedDashboard {
    fn from_ref(input: &ServerState) -> Self {
        input.dashboard.clone()
    }
}

impl FromRef<ServerState> for RenderedPage {
    fn from_ref(input: &ServerState) -> Self {
        input.page.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
