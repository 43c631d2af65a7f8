use super::toml_config::TomlConfig;
use crate::domain::model::CertificateRequest;
use crate::utils::error::{CertError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "certgen")]
#[command(about = "Generate a course completion certificate from form data")]
pub struct CliConfig {
    /// CPF of the certificate holder, punctuation optional
    #[arg(long, default_value = "")]
    pub cpf: String,

    /// Full name of the certificate holder
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Course/event id from the catalog
    #[arg(long, default_value = "")]
    pub course: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override output directory from config
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override workload hours printed on the certificate
    #[arg(long)]
    pub workload_hours: Option<u32>,

    /// Also write the certificate data as JSON next to the document
    #[arg(long)]
    pub json_sidecar: bool,

    /// Print the course catalog and exit
    #[arg(long)]
    pub list_courses: bool,

    /// Validate and render without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn request(&self) -> CertificateRequest {
        CertificateRequest {
            cpf: self.cpf.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            course_type: self.course.clone(),
        }
    }

    /// 載入 TOML 配置 (若有) 並套用命令列覆蓋設定
    pub fn resolve_settings(&self) -> Result<TomlConfig> {
        let mut settings = match &self.config {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(CertError::ConfigError {
                        message: format!("config file '{}' not found", path),
                    });
                }
                tracing::debug!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default().resolved(),
        };

        if let Some(output_path) = &self.output_path {
            settings.output.path = Some(output_path.clone());
            tracing::debug!("Output path overridden to: {}", output_path);
        }

        if let Some(hours) = self.workload_hours {
            settings.certificate.workload_hours = Some(hours);
        }

        if self.json_sidecar {
            settings.output.json_sidecar = Some(true);
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        if let Some(hours) = self.workload_hours {
            validation::validate_positive_number("workload_hours", hours, 1)?;
        }

        Ok(())
    }
}
