pub mod app;
pub mod validation;
