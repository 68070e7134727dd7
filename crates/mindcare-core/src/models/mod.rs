pub mod profile;
pub mod risk;
pub mod screen;
pub mod user;
