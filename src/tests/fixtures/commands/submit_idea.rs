// Shared test fixture for the SubmitIdea command, seeded from a JSON form submission.

use crate::modules::ideas::use_cases::submit_idea::command::SubmitIdea;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitIdeaDto {
    pub id: String,
    pub idea_id: String,
    pub associate_domain_id: String,
    pub associate_name: String,
    pub function: String,
    pub team_lead: String,
    pub functional_manager: String,
    pub state: String,
    pub application_name: String,
    pub specify_application_name: String,
    pub idea_name: String,
    pub problem_statement: String,
    pub solution: String,
    pub savings_type: String,
    pub savings_comment: String,
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
}

pub struct SubmitIdeaBuilder {
    inner: SubmitIdea,
}

impl Default for SubmitIdeaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitIdeaBuilder {
    pub fn new() -> Self {
        let dto: SubmitIdeaDto =
            serde_json::from_str(include_str!("json/submit_idea.json")).unwrap();

        Self {
            inner: SubmitIdea {
                id: dto.id,
                idea_id: Some(dto.idea_id),
                associate_domain_id: Some(dto.associate_domain_id),
                associate_name: Some(dto.associate_name),
                function: Some(dto.function),
                team_lead: Some(dto.team_lead),
                functional_manager: Some(dto.functional_manager),
                state: Some(dto.state),
                application_name: Some(dto.application_name),
                specify_application_name: Some(dto.specify_application_name),
                idea_name: Some(dto.idea_name),
                problem_statement: Some(dto.problem_statement),
                solution: Some(dto.solution),
                savings_type: Some(dto.savings_type),
                savings_comment: Some(dto.savings_comment),
                submission_date_time: None,
                submitted_at: fixed_now(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn idea_id(mut self, v: impl Into<String>) -> Self {
        self.inner.idea_id = Some(v.into());
        self
    }

    pub fn associate_domain_id(mut self, v: impl Into<String>) -> Self {
        self.inner.associate_domain_id = Some(v.into());
        self
    }

    pub fn function(mut self, v: impl Into<String>) -> Self {
        self.inner.function = Some(v.into());
        self
    }

    pub fn team_lead(mut self, v: impl Into<String>) -> Self {
        self.inner.team_lead = Some(v.into());
        self
    }

    pub fn functional_manager(mut self, v: impl Into<String>) -> Self {
        self.inner.functional_manager = Some(v.into());
        self
    }

    pub fn problem_statement(mut self, v: impl Into<String>) -> Self {
        self.inner.problem_statement = Some(v.into());
        self
    }

    pub fn submission_date_time(mut self, v: impl Into<String>) -> Self {
        self.inner.submission_date_time = Some(v.into());
        self
    }

    pub fn submitted_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.submitted_at = v;
        self
    }

    pub fn build(self) -> SubmitIdea {
        self.inner
    }
}

#[cfg(test)]
mod submit_idea_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitIdeaBuilder::default().build();
        assert_eq!(built.idea_id.as_deref(), Some("IDEA-1"));
        assert_eq!(built.associate_domain_id.as_deref(), Some("A1"));
        assert_eq!(built.function.as_deref(), Some("DDO"));
        assert_eq!(built.submission_date_time, None);
        assert_eq!(built.submitted_at, fixed_now());
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = SubmitIdeaBuilder::new()
            .id("id-2")
            .idea_id("IDEA-2")
            .associate_domain_id("A2")
            .function("PCM")
            .submission_date_time("2024-01-01T00:00:00.000Z")
            .build();
        assert_eq!(custom.id, "id-2");
        assert_eq!(custom.idea_id.as_deref(), Some("IDEA-2"));
        assert_eq!(custom.associate_domain_id.as_deref(), Some("A2"));
        assert_eq!(custom.function.as_deref(), Some("PCM"));
        assert_eq!(
            custom.submission_date_time.as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );
    }
}
