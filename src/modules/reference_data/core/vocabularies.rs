// Controlled vocabularies offered to the submission and review forms.
//
// Records are not validated against these lists; legacy values stay readable and
// the field migration maps the known ones onto the canonical names below.

use serde::Serialize;

pub const FUNCTIONS: &[&str] = &[
    "DDO",
    "L&D Offshore",
    "PCM",
    "Provider Enrollment",
    "Re-work",
    "Terms",
    "Rosters",
];

pub const TEAM_LEADS: &[&str] = &[
    "Adhikary, Gopa",
    "Aruchamy, Karuppusamy",
    "Badoni, Sukesh",
    "Biraiah, DEEPAK",
    "Chava, Kiran Kumar",
    "Dorepally, Ashwini",
    "Guttula, Sreenivas",
    "K v s, Deepa",
    "Kandasamy, Krishnakumar",
    "Kumar, Nirmal",
    "Laxmi Vandana, Sunkara",
    "M, Pradeep",
    "Machannagari, Jaipal Reddy",
    "Mohapatra, Ipsa",
    "Pathak, Anupam",
    "Pokuri, Subba",
    "Rajani, Radhae",
    "Ramakrishna Bhat, Anuradha",
    "Ranganathan, Sharmila Devi",
    "Ravindran, Arun Raj",
    "Samuel, Sonu",
    "Saxena, Sangam",
    "Sharma Rohit",
    "Thami, Rajendra Kumar",
    "Varshney, Juganu",
    "Y N, Ananda",
];

pub const FUNCTIONAL_MANAGERS: &[&str] = &[
    "Ravindran, Arun Raj",
    "Chatterjee, Anupam",
    "Muralidharan, TamilEnian",
    "K v s, Deepa",
    "Bn, Aparna",
    "Krishna, Karra Mohan",
    "Kandasamy, Krishnakumar",
];

pub const SAVINGS_TYPES: &[&str] = &[
    "Quality Improvement",
    "Soft Savings",
    "Productivity Improvement",
    "Hard Savings - FTE",
];

pub const APPLICATION_NAMES: &[&str] = &[
    "SPS",
    "Roster Automation",
    "PCM",
    "PLM",
    "DART",
    "WGS",
    "PEGA",
    "GBD Facets",
    "Other",
    "BOT/Automation",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabularies {
    pub functions: &'static [&'static str],
    pub team_leads: &'static [&'static str],
    pub functional_managers: &'static [&'static str],
    pub savings_types: &'static [&'static str],
    pub application_names: &'static [&'static str],
}

pub const VOCABULARIES: Vocabularies = Vocabularies {
    functions: FUNCTIONS,
    team_leads: TEAM_LEADS,
    functional_managers: FUNCTIONAL_MANAGERS,
    savings_types: SAVINGS_TYPES,
    application_names: APPLICATION_NAMES,
};
