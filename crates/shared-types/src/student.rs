use crate::filter::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// MyGoodLife planning domains.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum LifeDomain {
    Employment,
    Education,
    IndependentLiving,
    Community,
    Health,
    Other,
}

impl LifeDomain {
    pub const ALL: [LifeDomain; 5] = [
        LifeDomain::Employment,
        LifeDomain::Education,
        LifeDomain::IndependentLiving,
        LifeDomain::Community,
        LifeDomain::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifeDomain::Employment => "employment",
            LifeDomain::Education => "education",
            LifeDomain::IndependentLiving => "independent_living",
            LifeDomain::Community => "community",
            LifeDomain::Health => "health",
            LifeDomain::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LifeDomain::Employment => "Employment",
            LifeDomain::Education => "Education & Training",
            LifeDomain::IndependentLiving => "Independent Living",
            LifeDomain::Community => "Community Participation",
            LifeDomain::Health => "Health & Wellness",
            LifeDomain::Other => "Other",
        }
    }

    /// Parse a domain string. Unknown values map to `Other`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "employment" => LifeDomain::Employment,
            "education" => LifeDomain::Education,
            "independent_living" => LifeDomain::IndependentLiving,
            "community" => LifeDomain::Community,
            "health" => LifeDomain::Health,
            _ => LifeDomain::Other,
        }
    }
}

impl From<String> for LifeDomain {
    fn from(s: String) -> Self {
        Self::from_str_or_default(&s)
    }
}

/// Goal completion within one domain of a student's plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainProgress {
    pub domain: LifeDomain,
    #[serde(default)]
    pub completed_goals: u32,
    #[serde(default)]
    pub total_goals: u32,
}

impl DomainProgress {
    /// Percentage of goals completed, capped at 100. Zero when no goals are set.
    pub fn percent(&self) -> f64 {
        if self.total_goals == 0 {
            return 0.0;
        }
        (self.completed_goals as f64 / self.total_goals as f64 * 100.0).min(100.0)
    }
}

/// A student on a facilitator's caseload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    #[serde(default)]
    pub domains: Vec<DomainProgress>,
    /// Focus areas, used as filter tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Only populated by the single-student endpoint.
    #[serde(default)]
    pub notes: String,
}

impl StudentSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Mean of the per-domain percentages; zero for a student with no plan yet.
    pub fn overall_progress(&self) -> f64 {
        if self.domains.is_empty() {
            return 0.0;
        }
        self.domains.iter().map(DomainProgress::percent).sum::<f64>() / self.domains.len() as f64
    }

    pub fn progress_in(&self, domain: LifeDomain) -> Option<&DomainProgress> {
        self.domains.iter().find(|d| d.domain == domain)
    }
}

impl Filterable for StudentSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.school.as_str(),
        ]
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// Aggregated dashboard statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub active_plans: u32,
    #[serde(default)]
    pub open_alerts: u32,
    #[serde(default)]
    pub completed_goals: u32,
}
