use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::skill::{Skill, SkillWithYears};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterSkillPayload {
    #[validate(length(min = 1))]
    pub name: String,
}

/// A skill declared on a user or vacancy registration.
///
/// `name` is accepted for client convenience but the catalog name is
/// authoritative; only `id` and `years` are stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SkillYearsPayload {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub years: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillResponse {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillYearsResponse {
    pub id: i32,
    pub name: String,
    pub years: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SkillListResponse {
    pub status: String,
    pub results: usize,
    pub skills: Vec<SkillResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkillListQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub search: Option<String>,
}

impl From<Skill> for SkillResponse {
    fn from(value: Skill) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

impl From<SkillWithYears> for SkillYearsResponse {
    fn from(value: SkillWithYears) -> Self {
        Self {
            id: value.id,
            name: value.name,
            years: value.years,
        }
    }
}

impl From<Vec<Skill>> for SkillListResponse {
    fn from(value: Vec<Skill>) -> Self {
        Self {
            status: "success".to_string(),
            results: value.len(),
            skills: value.into_iter().map(Into::into).collect(),
        }
    }
}
