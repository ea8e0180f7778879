// Library exports for smartinbox crate
// This allows tests and other crates to use the modules

pub mod analysis;
pub mod config;
pub mod email;
pub mod gmail_client;
pub mod report;
