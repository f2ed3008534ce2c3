use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: String,
}

/// A skill joined with the years recorded on one of its associations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillWithYears {
    pub id: i32,
    pub name: String,
    pub years: i32,
}
