use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::skill_dto::{SkillYearsPayload, SkillYearsResponse};
use crate::models::skill::SkillWithYears;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(range(min = 0))]
    pub years_prev_exp: i32,
    #[serde(default)]
    #[validate(nested, custom(function = "crate::utils::validation::unique_skill_ids"))]
    pub skills: Vec<SkillYearsPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(range(min = 0))]
    pub years_prev_exp: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub status: String,
    pub message: String,
}

impl RegistrationResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub years_prev_exp: i32,
    pub skills: Vec<SkillYearsResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub years_prev_exp: i32,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn new(user: User, skills: Vec<SkillWithYears>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            years_prev_exp: user.years_prev_exp,
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<User> for UpdateUserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            years_prev_exp: value.years_prev_exp,
            updated_at: value.updated_at,
        }
    }
}
