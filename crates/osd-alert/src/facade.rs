//! Cluster-identity-aware entry point for raising and clearing alerts.
//!
//! A facade is bound once to a node id, cluster id, version and an
//! [`AlertStore`]. It is read-only afterwards and can be shared freely
//! between threads. Callers either pass an `Arc<AlertFacade>` around or
//! install one process-wide handle with [`init`] during startup and fetch
//! it with [`instance`].

use std::sync::{Arc, OnceLock};

use osd_api::{Alert, ResourceType, SeverityType};
use tracing::{debug, info, warn};

use crate::config::AlertConfig;
use crate::error::{AlertError, AlertResult};
use crate::store::AlertStore;

static INSTANCE: OnceLock<Arc<AlertFacade>> = OnceLock::new();

/// Raises and clears alerts on behalf of one node.
pub struct AlertFacade {
    node_id: String,
    cluster_id: String,
    version: String,
    store: Arc<dyn AlertStore>,
}

impl AlertFacade {
    /// Binds a facade to its identity and store.
    pub fn new(
        node_id: impl Into<String>,
        cluster_id: impl Into<String>,
        version: impl Into<String>,
        store: Arc<dyn AlertStore>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            cluster_id: cluster_id.into(),
            version: version.into(),
            store,
        }
    }

    /// Binds a facade to the identity in `config`.
    pub fn from_config(config: &AlertConfig, store: Arc<dyn AlertStore>) -> AlertResult<Self> {
        config.validate()?;
        Ok(Self::new(
            config.node_id.clone(),
            config.cluster_id.clone(),
            config.version.clone(),
            store,
        ))
    }

    /// Node id.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Cluster id.
    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }

    /// Software version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Raises an alert with severity ALARM and returns its id.
    pub fn alarm(
        &self,
        alert_type: i64,
        msg: &str,
        resource: ResourceType,
        resource_id: &str,
    ) -> AlertResult<i64> {
        self.raise(SeverityType::Alarm, alert_type, msg, resource, resource_id)
            .map(|alert| alert.id)
    }

    /// Raises an alert with severity NOTIFY and returns its id.
    pub fn notify(
        &self,
        alert_type: i64,
        msg: &str,
        resource: ResourceType,
        resource_id: &str,
    ) -> AlertResult<i64> {
        self.raise(SeverityType::Notify, alert_type, msg, resource, resource_id)
            .map(|alert| alert.id)
    }

    /// Raises an alert with severity WARNING and returns its id.
    pub fn warn(
        &self,
        alert_type: i64,
        msg: &str,
        resource: ResourceType,
        resource_id: &str,
    ) -> AlertResult<i64> {
        self.raise(SeverityType::Warning, alert_type, msg, resource, resource_id)
            .map(|alert| alert.id)
    }

    /// Builds an alert with the given severity and hands it to the store.
    ///
    /// Returns the stored record on success. A store error is returned
    /// as-is; no id is reported for a failed raise and nothing is retried.
    pub fn raise(
        &self,
        severity: SeverityType,
        alert_type: i64,
        msg: &str,
        resource: ResourceType,
        resource_id: &str,
    ) -> AlertResult<Alert> {
        let mut alert = Alert::new(alert_type, resource, resource_id, severity, msg);
        debug!(
            "Raising alert: node={}, cluster={}, severity={}, resource={}, resource_id={}, type={}",
            self.node_id, self.cluster_id, severity, resource, resource_id, alert_type
        );

        match self.store.raise(&mut alert) {
            Ok(()) => Ok(alert),
            Err(e) => {
                warn!(
                    "Alert store rejected raise: severity={}, resource={}, resource_id={}: {}",
                    severity, resource, resource_id, e
                );
                Err(e)
            }
        }
    }

    /// Clears a previously raised alert. Existence is checked by the store.
    pub fn clear(&self, resource: ResourceType, alert_id: i64) -> AlertResult<()> {
        debug!(
            "Clearing alert: node={}, resource={}, id={}",
            self.node_id, resource, alert_id
        );
        self.store.clear(resource, alert_id).inspect_err(|e| {
            warn!(
                "Alert store rejected clear: resource={}, id={}: {}",
                resource, alert_id, e
            );
        })
    }

    /// Does nothing and always succeeds. Kept so old call sites still build.
    #[deprecated(note = "no-op; use alarm, notify or warn")]
    pub fn alert(&self, _name: &str, _msg: &str) -> AlertResult<()> {
        Ok(())
    }
}

/// Installs the process-wide facade. Call once during single-threaded
/// startup, before any thread may call [`instance`].
pub fn init(
    node_id: impl Into<String>,
    cluster_id: impl Into<String>,
    version: impl Into<String>,
    store: Arc<dyn AlertStore>,
) -> AlertResult<Arc<AlertFacade>> {
    let facade = Arc::new(AlertFacade::new(node_id, cluster_id, version, store));
    INSTANCE
        .set(facade.clone())
        .map_err(|_| AlertError::AlreadyInitialized)?;
    info!(
        "Alert facade initialized: node={}, cluster={}, version={}",
        facade.node_id, facade.cluster_id, facade.version
    );
    Ok(facade)
}

/// Returns the process-wide facade installed by [`init`].
pub fn instance() -> AlertResult<Arc<AlertFacade>> {
    INSTANCE.get().cloned().ok_or(AlertError::NotInitialized)
}
