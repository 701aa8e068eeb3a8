pub mod settings;
pub mod upload;
