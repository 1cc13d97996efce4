use std::fmt;

use serde::Serialize;

use crate::dss::{EvidenceKey, Scheme, Village};

/// One problem found in an ingested record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub record_id: String,
    pub field: &'static str,
    pub problem: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    MissingId,
    NonFinite,
    OutOfUnitRange { value: f64 },
    Negative { value: f64 },
    UnknownEvidenceKey { key: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = if self.record_id.is_empty() {
            "<unnamed>"
        } else {
            self.record_id.as_str()
        };
        match &self.problem {
            IssueKind::MissingId => write!(f, "{record}: {} is empty", self.field),
            IssueKind::NonFinite => write!(f, "{record}: {} is not a finite number", self.field),
            IssueKind::OutOfUnitRange { value } => {
                write!(f, "{record}: {} = {value} lies outside [0, 1]", self.field)
            }
            IssueKind::Negative { value } => {
                write!(f, "{record}: {} = {value} is negative", self.field)
            }
            IssueKind::UnknownEvidenceKey { key } => {
                write!(f, "{record}: {} lists unknown key '{key}'", self.field)
            }
        }
    }
}

struct IssueCollector<'a> {
    record_id: &'a str,
    issues: Vec<ValidationIssue>,
}

impl<'a> IssueCollector<'a> {
    fn new(record_id: &'a str) -> Self {
        Self {
            record_id,
            issues: Vec::new(),
        }
    }

    fn push(&mut self, field: &'static str, problem: IssueKind) {
        self.issues.push(ValidationIssue {
            record_id: self.record_id.to_string(),
            field,
            problem,
        });
    }

    fn require_id(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, IssueKind::MissingId);
        }
    }

    fn unit_interval(&mut self, field: &'static str, value: f64) {
        if !value.is_finite() {
            self.push(field, IssueKind::NonFinite);
        } else if !(0.0..=1.0).contains(&value) {
            self.push(field, IssueKind::OutOfUnitRange { value });
        }
    }

    fn non_negative(&mut self, field: &'static str, value: f64) {
        if !value.is_finite() {
            self.push(field, IssueKind::NonFinite);
        } else if value < 0.0 {
            self.push(field, IssueKind::Negative { value });
        }
    }
}

/// Range checks the scoring engine deliberately skips.
pub fn validate_village(village: &Village) -> Vec<ValidationIssue> {
    let mut collector = IssueCollector::new(&village.id);
    collector.require_id("id", &village.id);
    collector.unit_interval("groundwaterIndex", village.groundwater_index);
    collector.non_negative("agriAreaHa", village.agri_area_ha);
    collector.unit_interval("forestDegradationLevel", village.forest_degradation_level);
    collector.unit_interval("povertyScore", village.poverty_score);
    collector.issues
}

pub fn validate_scheme(scheme: &Scheme) -> Vec<ValidationIssue> {
    let mut collector = IssueCollector::new(&scheme.id);
    collector.require_id("id", &scheme.id);
    collector.non_negative("weights.lowWater", scheme.weights.low_water);
    collector.non_negative("weights.agri", scheme.weights.agri);
    collector.non_negative("weights.degradation", scheme.weights.degradation);
    collector.non_negative("weights.poverty", scheme.weights.poverty);

    for key in &scheme.evidence_keys {
        if key.parse::<EvidenceKey>().is_err() {
            collector.push(
                "evidenceKeys",
                IssueKind::UnknownEvidenceKey { key: key.clone() },
            );
        }
    }

    collector.issues
}
