// One-shot rename of legacy `function` and `functionalManager` values to the canonical
// vocabulary. Values without a mapping are left alone, so running it twice is a no-op.

use serde::Serialize;

use crate::modules::ideas::core::idea::{Collection, Idea};

pub const FUNCTION_MAPPINGS: &[(&str, &str)] = &[
    ("DDO - Sanction", "DDO"),
    ("DDO - Carelon BH", "DDO"),
    ("DDO-Sanction", "DDO"),
    ("PDS - Rework", "Re-work"),
    ("Rework", "Re-work"),
    ("Entire CA, Terms/Re-work", "Re-work"),
    ("PCM Medicare", "PCM"),
    ("L&D", "L&D Offshore"),
];

pub const FUNCTIONAL_MANAGER_MAPPINGS: &[(&str, &str)] = &[
    ("Arun Raj", "Ravindran, Arun Raj"),
    ("Arun Raj Ravindran", "Ravindran, Arun Raj"),
    ("Deepa K v s", "K v s, Deepa"),
    ("Deepa KVS", "K v s, Deepa"),
    ("Anupam Chatterjee", "Chatterjee, Anupam"),
    ("Kandaswamy Krishnakumar", "Kandasamy, Krishnakumar"),
    ("Aparna BN", "Bn, Aparna"),
];

fn lookup(mappings: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    mappings
        .iter()
        .find(|(legacy, _)| *legacy == value)
        .map(|(_, canonical)| *canonical)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedChange {
    pub id: String,
    pub collection: Collection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_functional_manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_functional_manager: Option<String>,
}

pub fn planned_change(idea: &Idea) -> Option<PlannedChange> {
    let function = lookup(FUNCTION_MAPPINGS, &idea.function);
    let manager = lookup(FUNCTIONAL_MANAGER_MAPPINGS, &idea.functional_manager);
    if function.is_none() && manager.is_none() {
        return None;
    }
    Some(PlannedChange {
        id: idea.id.clone(),
        collection: idea.collection,
        current_function: function.map(|_| idea.function.clone()),
        new_function: function.map(str::to_string),
        current_functional_manager: manager.map(|_| idea.functional_manager.clone()),
        new_functional_manager: manager.map(str::to_string),
    })
}

/// Rewrites the mapped fields in place; reports whether anything changed.
pub fn apply(idea: &mut Idea) -> bool {
    let mut changed = false;
    if let Some(function) = lookup(FUNCTION_MAPPINGS, &idea.function) {
        idea.function = function.to_string();
        changed = true;
    }
    if let Some(manager) = lookup(FUNCTIONAL_MANAGER_MAPPINGS, &idea.functional_manager) {
        idea.functional_manager = manager.to_string();
        changed = true;
    }
    changed
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPreview {
    pub total_ideas: usize,
    pub changes_preview: Vec<PlannedChange>,
    pub changes_count: usize,
}

pub fn preview(ideas: &[Idea]) -> MigrationPreview {
    let changes_preview: Vec<PlannedChange> = ideas.iter().filter_map(planned_change).collect();
    MigrationPreview {
        total_ideas: ideas.len(),
        changes_count: changes_preview.len(),
        changes_preview,
    }
}
