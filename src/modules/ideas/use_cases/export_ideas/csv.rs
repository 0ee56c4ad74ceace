// CSV rendering for the three export views.
//
// Every field is quoted with inner quotes doubled. Line breaks inside a field become a
// single space each, rows are separated by `\n`, and the document has no trailing newline.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Deserialize;
use thiserror::Error;

use crate::modules::ideas::core::display::status_text;
use crate::modules::ideas::core::idea::{Collection, Idea, RevertEntry};
use crate::modules::ideas::use_cases::list_ideas::query::{IdeaFilter, all_view, collection_view};
use crate::shared::core::primitives::non_blank;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("revert history could not be encoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("csv buffer could not be flushed: {0}")]
    Flush(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportView {
    #[default]
    All,
    Approved,
    Pending,
}

impl ExportView {
    pub fn file_stem(&self) -> &'static str {
        match self {
            ExportView::All => "all_ideas",
            ExportView::Approved => "approved_ideas",
            ExportView::Pending => "pending_ideas",
        }
    }

    fn headers(&self) -> &'static [&'static str] {
        match self {
            ExportView::All => ALL_HEADERS,
            ExportView::Approved => APPROVED_HEADERS,
            ExportView::Pending => PENDING_HEADERS,
        }
    }

    /// Records in the order the view shows them.
    pub fn select(&self, ideas: Vec<Idea>, filter: &IdeaFilter) -> Vec<Idea> {
        match self {
            ExportView::All => all_view(ideas, filter),
            ExportView::Approved => collection_view(ideas, Collection::Approved, filter),
            ExportView::Pending => collection_view(ideas, Collection::Pending, filter),
        }
    }

    fn row(&self, idea: &Idea) -> Result<Vec<String>, ExportError> {
        let optional = |value: &Option<String>| value.clone().unwrap_or_default();
        let submitter = [
            idea.idea_id.clone(),
            idea.associate_name.clone(),
            idea.associate_domain_id.clone(),
            idea.function.clone(),
            idea.team_lead.clone(),
            idea.functional_manager.clone(),
            idea.state.clone(),
        ];
        let application = [
            optional(&idea.application_name),
            optional(&idea.specify_application_name),
        ];
        let proposal = [
            idea.idea_name.clone(),
            idea.problem_statement.clone(),
            idea.solution.clone(),
            idea.savings_type.clone(),
            idea.savings_comment.clone(),
            idea.submission_date_time.clone(),
        ];

        let mut row: Vec<String> = submitter.to_vec();
        match self {
            ExportView::All => {
                row.extend(application);
                row.extend(proposal);
                let closed_on = match idea.collection {
                    Collection::Rejected => non_blank(idea.rejected_date.as_deref()),
                    _ => non_blank(idea.implemented_date.as_deref())
                        .or(non_blank(idea.rejected_date.as_deref())),
                }
                .unwrap_or_default();
                let revert_history = if idea.revert_history.is_empty() {
                    String::new()
                } else {
                    serde_json::to_string(&idea.revert_history)?
                };
                row.extend([
                    optional(&idea.approver_name),
                    optional(&idea.approver_domain_id),
                    status_text(idea).to_string(),
                    optional(&idea.approval_date_time),
                    closed_on.to_string(),
                    optional(&idea.actual_savings),
                    optional(&idea.rejection_comment),
                    optional(&idea.not_in_scope_reason),
                    revert_history,
                ]);
            }
            ExportView::Approved => {
                row.extend(proposal);
                row.extend([
                    optional(&idea.approver_name),
                    optional(&idea.approver_domain_id),
                    optional(&idea.approval_date_time),
                    idea.status.as_ref().map(|s| s.to_string()).unwrap_or_default(),
                    optional(&idea.implemented_date),
                    optional(&idea.actual_savings),
                    optional(&idea.implementation_notes),
                    join_reverts(&idea.revert_history, false),
                ]);
            }
            ExportView::Pending => {
                row.extend(application);
                row.extend(proposal);
                row.push(join_reverts(&idea.revert_history, true));
            }
        }
        Ok(row)
    }
}

const ALL_HEADERS: &[&str] = &[
    "Idea Id",
    "Associate Name",
    "Associate Domain ID",
    "Function",
    "Team Lead",
    "Functional Manager",
    "State",
    "Application Name",
    "Specify Application Name",
    "Idea Name",
    "Problem Statement",
    "Solution",
    "Savings Type",
    "Savings Comment",
    "Submission Date",
    "Approver Name",
    "Approver Domain ID",
    "Status",
    "Approval Date/Time",
    "Implemented/Rejected Date",
    "Actual Savings",
    "Rejection Reason",
    "Not In Scope Reason",
    "Revert History",
];

const APPROVED_HEADERS: &[&str] = &[
    "Idea Id",
    "Associate Name",
    "Associate Domain ID",
    "Function",
    "Team Lead",
    "Functional Manager",
    "State",
    "Idea Name",
    "Problem Statement",
    "Solution",
    "Savings Type",
    "Savings Comment",
    "Submission Date",
    "Approver Name",
    "Approver Domain ID",
    "Approval Date/Time",
    "Status",
    "Implemented Date",
    "Actual Savings",
    "Implementation Notes",
    "Revert History",
];

const PENDING_HEADERS: &[&str] = &[
    "Idea Id",
    "Associate Name",
    "Associate Domain ID",
    "Function",
    "Team Lead",
    "Functional Manager",
    "State",
    "Application Name",
    "Specify Application Name",
    "Idea Name",
    "Problem Statement",
    "Solution",
    "Savings Type",
    "Savings Comment",
    "Submission Date/Time",
    "Revert History",
];

fn join_reverts(history: &[RevertEntry], with_origin: bool) -> String {
    history
        .iter()
        .map(|r| {
            let line = format!(
                "{}: {} ({}) - {}",
                r.revert_date_time, r.reverted_by, r.reverted_by_domain_id, r.revert_reason
            );
            if with_origin {
                format!("{line} (From: {})", r.previous_status.as_str())
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn flatten_line_breaks(field: &str) -> String {
    field.replace(['\r', '\n'], " ")
}

/// Renders `ideas` (already in view order) as a CSV document.
pub fn render(view: ExportView, ideas: &[Idea]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(view.headers())?;
    for idea in ideas {
        let row = view.row(idea)?;
        writer.write_record(row.iter().map(|field| flatten_line_breaks(field)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.error().to_string()))?;
    let mut document = String::from_utf8(bytes)?;
    if document.ends_with('\n') {
        document.pop();
    }
    Ok(document)
}
