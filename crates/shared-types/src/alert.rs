use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a plan-quality alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AlertSeverity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Numeric rank for ordering; higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            AlertSeverity::Info => 0,
            AlertSeverity::Warning => 1,
            AlertSeverity::Critical => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    /// Parse a severity string, defaulting to `Info` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "warning" => AlertSeverity::Warning,
            "critical" => AlertSeverity::Critical,
            _ => AlertSeverity::Info,
        }
    }
}

impl From<String> for AlertSeverity {
    fn from(s: String) -> Self {
        Self::from_str_or_default(&s)
    }
}

/// A quality alert raised against a student's transition plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityAlert {
    pub id: String,
    pub student_id: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub severity: AlertSeverity,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
}

/// Critical first; newest first within a severity.
pub fn sort_alerts_by_severity(alerts: &mut [QualityAlert]) {
    alerts.sort_by(|a, b| {
        b.severity
            .rank()
            .cmp(&a.severity.rank())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Unresolved alerts, in source order.
pub fn open_alerts(alerts: &[QualityAlert]) -> Vec<&QualityAlert> {
    alerts.iter().filter(|a| !a.resolved).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alert(id: &str, severity: AlertSeverity, day: u32, resolved: bool) -> QualityAlert {
        QualityAlert {
            id: id.into(),
            student_id: "s1".into(),
            student_name: "Ava Nguyen".into(),
            severity,
            title: "Missing employment goal".into(),
            message: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 5, day, 9, 0, 0).unwrap(),
            resolved,
        }
    }

    #[test]
    fn sort_puts_critical_first_then_newest() {
        let mut alerts = vec![
            alert("a", AlertSeverity::Info, 3, false),
            alert("b", AlertSeverity::Critical, 1, false),
            alert("c", AlertSeverity::Warning, 2, false),
            alert("d", AlertSeverity::Critical, 4, false),
        ];
        sort_alerts_by_severity(&mut alerts);
        let ids: Vec<&str> = alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn open_alerts_skips_resolved() {
        let alerts = vec![
            alert("a", AlertSeverity::Info, 1, true),
            alert("b", AlertSeverity::Warning, 2, false),
        ];
        let open = open_alerts(&alerts);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, "b");
    }

    #[test]
    fn severity_parsing() {
        assert_eq!(AlertSeverity::from_str_or_default("CRITICAL"), AlertSeverity::Critical);
        assert_eq!(AlertSeverity::from_str_or_default("bogus"), AlertSeverity::Info);
        for s in [AlertSeverity::Info, AlertSeverity::Warning, AlertSeverity::Critical] {
            assert_eq!(AlertSeverity::from_str_or_default(s.as_str()), s);
        }
    }

    #[test]
    fn alert_deserializes_from_api_json() {
        let json = r#"{"id":"al-9","student_id":"s1","severity":"warning",
            "title":"Plan review overdue","created_at":"2026-04-01T12:00:00Z"}"#;
        let a: QualityAlert = serde_json::from_str(json).unwrap();
        assert_eq!(a.severity, AlertSeverity::Warning);
        assert!(!a.resolved);
        assert_eq!(a.student_name, "");
    }

    #[test]
    fn alert_severity_wire_values_are_lenient() {
        let json = r#"{"id":"al-1","student_id":"s1","severity":"CRITICAL",
            "title":"No employment goal","created_at":"2026-04-01T12:00:00Z"}"#;
        let a: QualityAlert = serde_json::from_str(json).unwrap();
        assert_eq!(a.severity, AlertSeverity::Critical);

        let json = r#"{"id":"al-2","student_id":"s1","severity":"urgent",
            "title":"Unknown level","created_at":"2026-04-01T12:00:00Z"}"#;
        let a: QualityAlert = serde_json::from_str(json).unwrap();
        assert_eq!(a.severity, AlertSeverity::Info);
    }
}
