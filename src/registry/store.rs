//! Project Registry
//!
//! Read-only mapping from project id to record, built once before the
//! first render. Lookups are exact string matches.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::{RegistryError, RegistryResult};
use super::types::ProjectRecord;

/// Immutable collection of project records in document order
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

/// Top-level layout of a projects document: a list of `[[project]]` tables
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectsDocument {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectRecord>,
}

impl Registry {
    /// Build a registry, validating every record
    pub fn from_records(records: Vec<ProjectRecord>) -> RegistryResult<Self> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            validate_record(record)?;
            if index.insert(record.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// Parse a projects document
    ///
    /// `document` names the source in error messages.
    pub fn from_toml_str(input: &str, document: &str) -> RegistryResult<Self> {
        let parsed: ProjectsDocument = toml::from_str(input).map_err(|e| RegistryError::Parse {
            document: document.to_string(),
            message: e.to_string(),
        })?;
        Self::from_records(parsed.projects)
    }

    /// Look up a project by exact id
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Records in document order
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    /// Identifiers in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_record(record: &ProjectRecord) -> RegistryResult<()> {
    validate_id(&record.id)?;

    if record.title.trim().is_empty() {
        return Err(RegistryError::EmptyField {
            id: record.id.clone(),
            field: "title",
        });
    }

    validate_date(&record.id, &record.date)
}

/// Ids must survive the hash grammar unchanged and stay readable in URLs
fn validate_id(id: &str) -> RegistryResult<()> {
    let reason = if id.is_empty() {
        Some("must not be empty")
    } else if id.contains('/') {
        Some("must not contain '/'")
    } else if id.contains('#') {
        Some("must not contain '#'")
    } else if id.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if id.chars().any(char::is_control) {
        Some("must not contain control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RegistryError::InvalidId {
            id: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn validate_date(id: &str, date: &str) -> RegistryResult<()> {
    let well_formed = date.len() == 7
        && NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d").is_ok();

    if well_formed {
        Ok(())
    } else {
        Err(RegistryError::InvalidDate {
            id: id.to_string(),
            date: date.to_string(),
        })
    }
}
