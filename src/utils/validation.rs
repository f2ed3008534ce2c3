use std::collections::HashSet;

use validator::{Validate, ValidationError};

use crate::dto::skill_dto::SkillYearsPayload;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Rejects payloads declaring the same skill twice, which the association
/// tables would refuse halfway through a registration.
#[allow(clippy::ptr_arg)]
pub fn unique_skill_ids(skills: &Vec<SkillYearsPayload>) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(skills.len());
    for skill in skills {
        if !seen.insert(skill.id) {
            let mut err = ValidationError::new("duplicate_skill");
            err.message = Some(format!("skill {} is declared more than once", skill.id).into());
            return Err(err);
        }
    }
    Ok(())
}
