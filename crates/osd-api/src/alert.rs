//! Alert records.

use serde::{Deserialize, Serialize};

use crate::enums::{ResourceType, SeverityType};

/// A typed operational event. `id` is assigned by the alert store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Caller-defined alert type code.
    pub alert_type: i64,
    /// Kind of entity the alert concerns.
    pub resource: ResourceType,
    /// Id of the entity.
    pub resource_id: String,
    /// Urgency tier.
    pub severity: SeverityType,
    /// Human-readable message.
    pub message: String,
    /// Store-assigned identity; 0 until raised.
    pub id: i64,
}

impl Alert {
    /// Builds an unraised alert.
    pub fn new(
        alert_type: i64,
        resource: ResourceType,
        resource_id: impl Into<String>,
        severity: SeverityType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            alert_type,
            resource,
            resource_id: resource_id.into(),
            severity,
            message: message.into(),
            id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_alert_is_unraised() {
        let alert = Alert::new(
            7,
            ResourceType::Volume,
            "vol1",
            SeverityType::Warning,
            "volume degraded",
        );
        assert_eq!(alert.id, 0);
        assert_eq!(alert.resource_id, "vol1");
        assert_eq!(alert.severity, SeverityType::Warning);
    }

    #[test]
    fn test_alert_json_uses_simple_names() {
        let alert = Alert::new(1, ResourceType::Node, "n1", SeverityType::Alarm, "down");
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["resource"], "node");
        assert_eq!(json["severity"], "alarm");
    }
}
