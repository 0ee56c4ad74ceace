// Business analyst roster and the optional employee directory.
//
// Responsibilities
// - Resolve a business analyst by domain id or by name; first match wins.
// - Resolve an associate's organisational details by domain id, so the submission
//   form can prefill name, function, team lead and functional manager.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::modules::reference_data::core::vocabularies::{VOCABULARIES, Vocabularies};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAnalyst {
    pub domain_id: &'static str,
    pub name: &'static str,
}

const fn analyst(domain_id: &'static str, name: &'static str) -> BusinessAnalyst {
    BusinessAnalyst { domain_id, name }
}

// AG54455 is listed twice upstream; lookups by domain id return the first entry.
pub const BUSINESS_ANALYSTS: &[BusinessAnalyst] = &[
    analyst("AL50044", "Asha"),
    analyst("AL47104", "Balu, Prakash"),
    analyst("AH21746", "Govardhan, Chavala"),
    analyst("AG26245", "Kumar R, Kishor"),
    analyst("AG66094", "Madani, Mohammed"),
    analyst("AH47129", "Mahapatra, Susmita"),
    analyst("AG24670", "Raj, Vikram"),
    analyst("AG54727", "S N, Sindhu"),
    analyst("AL99289", "Varshney, Juganu"),
    analyst("AG54455", "Machannagari, Jaipal Reddy"),
    analyst("AL50727", "Manokaran, Krishnamoorthi"),
    analyst("AG54755", "Dcosta, Joseph"),
    analyst("AL49287", "Murthy, Ganesh"),
    analyst("AG54455", "S, Saidulu"),
    analyst("AH84951", "Kamaraj, Masilamani"),
];

pub fn business_analyst_by_domain_id(domain_id: &str) -> Option<BusinessAnalyst> {
    BUSINESS_ANALYSTS
        .iter()
        .find(|ba| ba.domain_id == domain_id)
        .copied()
}

pub fn business_analyst_by_name(name: &str) -> Option<BusinessAnalyst> {
    BUSINESS_ANALYSTS.iter().find(|ba| ba.name == name).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub associate_name: String,
    pub function: String,
    pub team_lead: String,
    #[serde(alias = "functionalLeader")]
    pub functional_manager: String,
}

/// Domain id to employee details. Empty when no directory file is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDirectory {
    employees: HashMap<String, Employee>,
}

impl EmployeeDirectory {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let employees: HashMap<String, Employee> =
            serde_json::from_str(raw).context("employee directory is not a JSON object of employees")?;
        Ok(Self { employees })
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading employee directory {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn get(&self, domain_id: &str) -> Option<&Employee> {
        self.employees.get(domain_id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub employees: EmployeeDirectory,
}

impl ReferenceData {
    pub fn new(employees: EmployeeDirectory) -> Self {
        Self { employees }
    }

    pub fn vocabularies(&self) -> Vocabularies {
        VOCABULARIES
    }

    pub fn business_analysts(&self) -> &'static [BusinessAnalyst] {
        BUSINESS_ANALYSTS
    }
}
