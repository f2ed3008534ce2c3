pub mod skill_dto;
pub mod user_dto;
pub mod vacancy_dto;
