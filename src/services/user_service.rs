use crate::dto::user_dto::{RegisterUserPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::models::skill::SkillWithYears;
use crate::models::user::{User, UserSkill};
use crate::services::skill_service::{skill_ids, SkillService};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, years_prev_exp, created_at, updated_at";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
    skill_service: SkillService,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        let skill_service = SkillService::new(pool.clone());
        Self {
            pool,
            skill_service,
        }
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Inserts the user and one association row per declared skill in a
    /// single transaction.
    pub async fn register(&self, payload: RegisterUserPayload) -> Result<User> {
        let email = payload.email.trim().to_lowercase();
        if self.get_by_email(&email).await?.is_some() {
            return Err(Error::Conflict("User already exist".to_string()));
        }
        self.skill_service
            .ensure_exist(&skill_ids(&payload.skills))
            .await?;

        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (first_name, last_name, email, years_prev_exp)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(payload.first_name.trim())
        .bind(payload.last_name.trim())
        .bind(&email)
        .bind(payload.years_prev_exp)
        .fetch_one(&mut *tx)
        .await?;

        for skill in &payload.skills {
            sqlx::query("INSERT INTO users_skills (user_id, skill_id, years) VALUES ($1, $2, $3)")
                .bind(user.id)
                .bind(skill.id)
                .bind(skill.years)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            user_id = %user.id,
            skills = payload.skills.len(),
            "User registered"
        );
        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| Error::NotFound(format!("No user with this id: {} found", id)))
    }

    pub async fn get_with_skills(&self, id: Uuid) -> Result<(User, Vec<SkillWithYears>)> {
        let user = self.get_by_id(id).await?;
        let skills = sqlx::query_as::<_, SkillWithYears>(
            r#"
            SELECT s.id, s.name, us.years
            FROM users_skills us
            JOIN skills s ON s.id = us.skill_id
            WHERE us.user_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok((user, skills))
    }

    /// Skill associations are left untouched.
    pub async fn update(&self, id: Uuid, payload: UpdateUserPayload) -> Result<User> {
        let email = payload.email.trim().to_lowercase();
        if let Some(other) = self.get_by_email(&email).await? {
            if other.id != id {
                return Err(Error::Conflict(format!("Email {} is already in use", email)));
            }
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET
                first_name = $2,
                last_name = $3,
                email = $4,
                years_prev_exp = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(id)
        .bind(payload.first_name.trim())
        .bind(payload.last_name.trim())
        .bind(&email)
        .bind(payload.years_prev_exp)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| Error::NotFound(format!("No user with this id: {} found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("No user with this id: {} found", id)));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// An unknown user simply has no skills.
    pub async fn skills_for(&self, user_id: Uuid) -> Result<Vec<UserSkill>> {
        let skills = sqlx::query_as::<_, UserSkill>(
            r#"
            SELECT user_id, skill_id, years
            FROM users_skills
            WHERE user_id = $1
            ORDER BY skill_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }
}
