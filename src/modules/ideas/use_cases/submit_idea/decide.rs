// Pure decision function for submission.
//
// Responsibilities
// - Check required fields in form order and name the first one missing.
// - Build a Pending record with no review or status fields.
// - Never perform input or output.

use crate::modules::ideas::core::decision::{DecideError, require};
use crate::modules::ideas::core::idea::{Collection, Idea};
use crate::modules::ideas::use_cases::submit_idea::command::SubmitIdea;
use crate::shared::core::primitives::{format_timestamp, non_blank};

pub fn decide_submit(command: SubmitIdea) -> Result<Idea, DecideError> {
    let idea_id = require(command.idea_id, "ideaId")?;
    let associate_domain_id = require(command.associate_domain_id, "associateDomainId")?;
    let associate_name = require(command.associate_name, "associateName")?;
    let function = require(command.function, "function")?;
    let team_lead = require(command.team_lead, "teamLead")?;
    let functional_manager = require(command.functional_manager, "functionalManager")?;
    let state = require(command.state, "state")?;
    let idea_name = require(command.idea_name, "ideaName")?;
    let problem_statement = require(command.problem_statement, "problemStatement")?;
    let solution = require(command.solution, "solution")?;
    let savings_type = require(command.savings_type, "savingsType")?;

    let submission_date_time = non_blank(command.submission_date_time.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format_timestamp(command.submitted_at));

    Ok(Idea {
        id: command.id,
        collection: Collection::Pending,
        idea_id,
        associate_domain_id,
        associate_name,
        function,
        team_lead,
        functional_manager,
        state,
        application_name: Some(command.application_name.unwrap_or_default()),
        specify_application_name: Some(command.specify_application_name.unwrap_or_default()),
        idea_name,
        problem_statement,
        solution,
        savings_type,
        savings_comment: command.savings_comment.unwrap_or_default(),
        submission_date_time,
        ..Idea::default()
    })
}
