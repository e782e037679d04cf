pub mod admin;
pub mod appointments;
pub mod assessments;
pub mod auth;
pub mod comments;
pub mod counsellor;
pub mod forum;
pub mod health;
pub mod notifications;
pub mod questionnaires;
pub mod resources;
pub mod support;
pub mod wellness;
