// Pure merge function for partial edits.
//
// Responsibilities
// - Overwrite each supplied scalar field, leave the rest alone.
// - A non-blank implementation note becomes the current note and is appended to
//   `implementationNotesHistory`.
// - A change in the displayed application name is appended to `applicationNameHistory`.
// - Never touch `collection`, `id`, or existing history entries.

use crate::modules::ideas::core::idea::{Actor, ApplicationNameChange, Idea, ImplementationNote};
use crate::modules::ideas::use_cases::patch_idea::command::PatchIdea;
use crate::shared::core::primitives::{format_timestamp, non_blank};

const DEFAULT_EDITOR_NAME: &str = "Business Analyst";
const DEFAULT_EDITOR_DOMAIN_ID: &str = "SYSTEM";

fn set(target: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *target = value;
    }
}

fn set_optional(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

pub fn decide_patch(idea: &Idea, command: PatchIdea) -> Idea {
    let PatchIdea {
        patch,
        editor,
        patched_at,
    } = command;
    let editor = editor.unwrap_or_else(|| Actor {
        domain_id: DEFAULT_EDITOR_DOMAIN_ID.to_string(),
        name: DEFAULT_EDITOR_NAME.to_string(),
    });
    let stamp = format_timestamp(patched_at);

    let mut next = idea.clone();
    set(&mut next.idea_id, patch.idea_id);
    set(&mut next.associate_domain_id, patch.associate_domain_id);
    set(&mut next.associate_name, patch.associate_name);
    set(&mut next.function, patch.function);
    set(&mut next.team_lead, patch.team_lead);
    set(&mut next.functional_manager, patch.functional_manager);
    set(&mut next.state, patch.state);
    set(&mut next.idea_name, patch.idea_name);
    set(&mut next.problem_statement, patch.problem_statement);
    set(&mut next.solution, patch.solution);
    set(&mut next.savings_type, patch.savings_type);
    set(&mut next.savings_comment, patch.savings_comment);
    set_optional(&mut next.approver_domain_id, patch.approver_domain_id);
    set_optional(&mut next.approver_name, patch.approver_name);
    set_optional(&mut next.rejection_comment, patch.rejection_comment);
    set_optional(&mut next.implemented_date, patch.implemented_date);
    set_optional(&mut next.actual_savings, patch.actual_savings);

    if let Some(note) = non_blank(patch.implementation_notes.as_deref()) {
        let note = note.trim().to_string();
        next.implementation_notes = Some(note.clone());
        next.implementation_notes_history.push(ImplementationNote {
            note,
            timestamp: stamp.clone(),
            ba_name: editor.name.clone(),
            ba_domain_id: editor.domain_id.clone(),
        });
    }

    if patch.application_name.is_some() || patch.specify_application_name.is_some() {
        let old_value = idea.display_application_name().to_string();
        if let Some(name) = patch.application_name {
            next.specify_application_name = Some(if name == "Other" {
                patch.specify_application_name.unwrap_or_default()
            } else {
                String::new()
            });
            next.application_name = Some(name);
        } else {
            next.specify_application_name = patch.specify_application_name;
        }
        let new_value = next.display_application_name().to_string();
        if new_value != old_value {
            next.application_name_history.push(ApplicationNameChange {
                old_value,
                new_value,
                changed_by: editor.name,
                changed_by_domain_id: editor.domain_id,
                change_date_time: stamp,
            });
        }
    }

    next
}
