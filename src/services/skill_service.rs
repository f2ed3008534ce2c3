use crate::dto::skill_dto::{RegisterSkillPayload, SkillListQuery, SkillYearsPayload};
use crate::error::{Error, Result};
use crate::models::skill::Skill;
use crate::utils::pagination::PageWindow;
use sqlx::PgPool;

#[derive(Clone)]
pub struct SkillService {
    pool: PgPool,
}

impl SkillService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: RegisterSkillPayload) -> Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(payload.name.trim())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(skill_id = skill.id, name = %skill.name, "Skill registered");
        Ok(skill)
    }

    pub async fn list(&self, query: SkillListQuery) -> Result<Vec<Skill>> {
        let window = PageWindow::new(query.page, query.limit, 10);
        let search = format!("%{}%", query.search.unwrap_or_default());

        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, name
            FROM skills
            WHERE name LIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>("SELECT id, name FROM skills WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        skill.ok_or_else(|| Error::NotFound(format!("No skill with this id: {} found", id)))
    }

    pub async fn update(&self, id: i32, payload: RegisterSkillPayload) -> Result<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(payload.name.trim())
        .fetch_optional(&self.pool)
        .await?;

        skill.ok_or_else(|| Error::NotFound(format!("No skill with this id: {} found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let res = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No skill with this id: {} found", id)));
        }
        tracing::info!(skill_id = id, "Skill deleted");
        Ok(())
    }

    /// Returns the ids from `ids` that are absent from the catalog.
    pub async fn missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let missing = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT requested.id
            FROM UNNEST($1::int4[]) AS requested(id)
            LEFT JOIN skills s ON s.id = requested.id
            WHERE s.id IS NULL
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(missing)
    }

    pub async fn ensure_exist(&self, ids: &[i32]) -> Result<()> {
        let missing = self.missing_ids(ids).await?;
        if !missing.is_empty() {
            return Err(Error::BadRequest(format!("Unknown skill ids: {:?}", missing)));
        }
        Ok(())
    }
}

pub fn skill_ids(skills: &[SkillYearsPayload]) -> Vec<i32> {
    skills.iter().map(|s| s.id).collect()
}
