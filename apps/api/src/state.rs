use std::sync::Arc;

use crate::audit::gathering::SnapshotSource;
use crate::audit::store::AuditStore;
use crate::audit::AuditEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pure scorer bound to the tier policy chosen at startup.
    pub engine: AuditEngine,
    /// Builds snapshots for stored athletes. Default: PgSnapshotSource.
    pub snapshots: Arc<dyn SnapshotSource>,
    /// Audit persistence. Default: PgAuditStore.
    pub store: Arc<dyn AuditStore>,
}
