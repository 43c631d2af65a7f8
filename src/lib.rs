pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::CertificateEngine, pipeline::SimpleCertificatePipeline};
pub use utils::error::{CertError, Result};
pub use utils::validators::{
    format_identifier, is_valid_email_syntax, is_valid_identifier, mask_identifier_partial,
};
