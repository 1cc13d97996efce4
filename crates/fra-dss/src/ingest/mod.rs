//! Loading and boundary validation for village and scheme datasets.
//!
//! The scoring engine accepts any numbers it is given; this module is where
//! out-of-range indicators and broken scheme definitions get noticed.

mod normalizer;
mod parser;
mod sample;
mod validate;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DataConfig;
use crate::dss::{Scheme, Village};

pub use sample::sample_dataset;
pub use validate::{validate_scheme, validate_village, IssueKind, ValidationIssue};

/// Villages and schemes ready for the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub villages: Vec<Village>,
    pub schemes: Vec<Scheme>,
}

/// How validation issues are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Log each issue and keep the record; the engine scores it as-is.
    #[default]
    Lenient,
    /// Reject the dataset on the first issue.
    Strict,
}

#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Invalid(ValidationIssue),
    Duplicate { kind: &'static str, id: String },
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(err) => write!(f, "failed to read dataset: {}", err),
            IngestError::Csv(err) => write!(f, "invalid village CSV data: {}", err),
            IngestError::Json(err) => write!(f, "invalid dataset JSON: {}", err),
            IngestError::Invalid(issue) => write!(f, "dataset failed validation: {}", issue),
            IngestError::Duplicate { kind, id } => {
                write!(f, "duplicate {} id '{}' in dataset", kind, id)
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(err) => Some(err),
            IngestError::Csv(err) => Some(err),
            IngestError::Json(err) => Some(err),
            IngestError::Invalid(_) | IngestError::Duplicate { .. } => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Records that passed the loader, plus the issues tolerated in lenient mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Checked<T> {
    pub records: Vec<T>,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader {
    mode: ValidationMode,
}

impl DatasetLoader {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Load the configured files, substituting the sample data for any missing path.
    pub fn load(&self, config: &DataConfig) -> Result<Dataset, IngestError> {
        let sample = sample_dataset();

        let villages = match &config.villages_path {
            Some(path) => self.villages_from_path(path)?.records,
            None => self.check_villages(sample.villages)?.records,
        };
        let schemes = match &config.schemes_path {
            Some(path) => self.schemes_from_path(path)?.records,
            None => self.check_schemes(sample.schemes)?.records,
        };

        tracing::info!(
            villages = villages.len(),
            schemes = schemes.len(),
            sample_villages = config.villages_path.is_none(),
            sample_schemes = config.schemes_path.is_none(),
            "decision support dataset loaded"
        );

        Ok(Dataset { villages, schemes })
    }

    /// Villages from a `.json` array or, for any other extension, a CSV export.
    pub fn villages_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Checked<Village>, IngestError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if is_json(path) {
            self.villages_from_json(file)
        } else {
            self.villages_from_reader(file)
        }
    }

    pub fn villages_from_reader<R: Read>(&self, reader: R) -> Result<Checked<Village>, IngestError> {
        let villages = parser::parse_villages(reader)?;
        self.check_villages(villages)
    }

    pub fn villages_from_json<R: Read>(&self, reader: R) -> Result<Checked<Village>, IngestError> {
        let villages: Vec<Village> = serde_json::from_reader(reader)?;
        self.check_villages(villages)
    }

    pub fn schemes_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Checked<Scheme>, IngestError> {
        let file = File::open(path)?;
        self.schemes_from_json(file)
    }

    pub fn schemes_from_json<R: Read>(&self, reader: R) -> Result<Checked<Scheme>, IngestError> {
        let schemes: Vec<Scheme> = serde_json::from_reader(reader)?;
        self.check_schemes(schemes)
    }

    pub fn check_villages(&self, villages: Vec<Village>) -> Result<Checked<Village>, IngestError> {
        let issues = self.screen("village", &villages, |village| {
            (village.id.as_str(), validate_village(village))
        })?;
        Ok(Checked {
            records: villages,
            issues,
        })
    }

    pub fn check_schemes(&self, schemes: Vec<Scheme>) -> Result<Checked<Scheme>, IngestError> {
        let issues = self.screen("scheme", &schemes, |scheme| {
            (scheme.id.as_str(), validate_scheme(scheme))
        })?;
        Ok(Checked {
            records: schemes,
            issues,
        })
    }

    fn screen<T, F>(
        &self,
        kind: &'static str,
        records: &[T],
        inspect: F,
    ) -> Result<Vec<ValidationIssue>, IngestError>
    where
        F: Fn(&T) -> (&str, Vec<ValidationIssue>),
    {
        let mut seen = HashSet::new();
        let mut tolerated = Vec::new();

        for record in records {
            let (id, issues) = inspect(record);
            if !id.is_empty() && !seen.insert(id.to_string()) {
                return Err(IngestError::Duplicate {
                    kind,
                    id: id.to_string(),
                });
            }

            for issue in issues {
                match self.mode {
                    ValidationMode::Strict => return Err(IngestError::Invalid(issue)),
                    ValidationMode::Lenient => {
                        tracing::warn!(kind, issue = %issue, "accepting record with validation issue");
                        tolerated.push(issue);
                    }
                }
            }
        }

        Ok(tolerated)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VILLAGE_CSV: &str = "id,name,groundwaterIndex,agriAreaHa,forestDegradationLevel,povertyScore,waterBodiesCount,population,homesteadCount\n\
V-01,Khairwani,0.3,60,0.6,0.7,4,420,80\n\
V-02,Badgaon,1.3,35,0.41,0.64,1,150,12\n";

    #[test]
    fn lenient_mode_keeps_records_and_reports_issues() {
        let checked = DatasetLoader::new(ValidationMode::Lenient)
            .villages_from_reader(VILLAGE_CSV.as_bytes())
            .expect("lenient load succeeds");

        assert_eq!(checked.records.len(), 2);
        assert_eq!(checked.issues.len(), 1);
        assert_eq!(checked.issues[0].record_id, "V-02");
        assert_eq!(checked.issues[0].field, "groundwaterIndex");
    }

    #[test]
    fn strict_mode_rejects_first_issue() {
        let err = DatasetLoader::new(ValidationMode::Strict)
            .villages_from_reader(VILLAGE_CSV.as_bytes())
            .expect_err("strict load fails");

        match err {
            IngestError::Invalid(issue) => assert_eq!(issue.record_id, "V-02"),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected_in_any_mode() {
        let csv = "id,name,groundwaterIndex,agriAreaHa,forestDegradationLevel,povertyScore,waterBodiesCount,population,homesteadCount\n\
V-01,Khairwani,0.3,60,0.6,0.7,4,420,80\n\
V-01,Khairwani again,0.3,60,0.6,0.7,4,420,80\n";

        let err = DatasetLoader::default()
            .villages_from_reader(csv.as_bytes())
            .expect_err("duplicates rejected");

        assert!(matches!(
            err,
            IngestError::Duplicate { kind: "village", ref id } if id == "V-01"
        ));
    }

    #[test]
    fn schemes_parse_from_dashboard_json() {
        let json = r#"[
            {
                "id": "JJM",
                "name": "Jal Jeevan Mission",
                "eligibility": ["Households without tap connection"],
                "evidenceKeys": ["groundwaterIndex", "waterBodiesCount"],
                "weights": {"lowWater": 2, "agri": 0, "degradation": 0, "poverty": 1}
            },
            {
                "id": "LOCAL",
                "name": "District convergence",
                "weights": {"lowWater": 0, "agri": 1, "degradation": 1, "poverty": 0}
            }
        ]"#;

        let checked = DatasetLoader::new(ValidationMode::Strict)
            .schemes_from_json(json.as_bytes())
            .expect("schemes parse");

        assert_eq!(checked.records.len(), 2);
        assert_eq!(checked.records[0].weights.low_water, 2.0);
        assert!(checked.records[1].evidence_keys.is_empty());
        assert!(checked.issues.is_empty());
    }

    #[test]
    fn sample_dataset_passes_strict_validation() {
        let loader = DatasetLoader::new(ValidationMode::Strict);
        let dataset = loader
            .load(&DataConfig::default())
            .expect("sample dataset loads");

        assert_eq!(dataset.schemes.len(), 5);
        assert!(!dataset.villages.is_empty());
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        let err = DatasetLoader::default()
            .villages_from_json("{not json".as_bytes())
            .expect_err("json rejected");
        assert!(matches!(err, IngestError::Json(_)));
        assert!(err.to_string().starts_with("invalid dataset JSON"));
    }
}
