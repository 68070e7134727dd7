pub mod assessments;
pub mod auth;
pub mod chat;
pub mod health;
pub mod instruments;
pub mod users;
