use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::skill_dto::{SkillYearsPayload, SkillYearsResponse};
use crate::models::skill::SkillWithYears;
use crate::models::vacancy::Vacancy;
use crate::services::vacancy_service::VacancyList;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterVacancyPayload {
    #[validate(length(min = 1))]
    pub position_name: String,
    #[validate(length(min = 1))]
    pub company_name: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    #[validate(length(min = 1))]
    pub currency: String,
    #[serde(default)]
    #[validate(nested, custom(function = "crate::utils::validation::unique_skill_ids"))]
    pub skills: Vec<SkillYearsPayload>,
}

/// Vacancy fields exposed on listings and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VacancySummary {
    pub id: Uuid,
    pub position_name: String,
    pub company_name: String,
    pub salary: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyDetailResponse {
    pub id: Uuid,
    pub position_name: String,
    pub company_name: String,
    pub salary: f64,
    pub currency: String,
    pub skills: Vec<SkillYearsResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyListResponse {
    pub items: Vec<VacancySummary>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub page: Option<i64>,
    #[serde(alias = "limit")]
    pub per_page: Option<i64>,
}

impl From<Vacancy> for VacancySummary {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id,
            position_name: value.position_name,
            company_name: value.company_name,
            salary: value.salary,
            currency: value.currency,
        }
    }
}

impl VacancyDetailResponse {
    pub fn new(vacancy: Vacancy, skills: Vec<SkillWithYears>) -> Self {
        Self {
            id: vacancy.id,
            position_name: vacancy.position_name,
            company_name: vacancy.company_name,
            salary: vacancy.salary,
            currency: vacancy.currency,
            skills: skills.into_iter().map(Into::into).collect(),
            created_at: vacancy.created_at,
            updated_at: vacancy.updated_at,
        }
    }
}

impl From<VacancyList> for VacancyListResponse {
    fn from(value: VacancyList) -> Self {
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
        }
    }
}
