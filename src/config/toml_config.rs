use crate::core::ConfigProvider;
use crate::domain::model::{default_certificate_types, CertificateType};
use crate::utils::error::{CertError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_SIGNATURE_LABEL: &str = "Assinatura do Responsável";
pub const DEFAULT_WORKLOAD_HOURS: u32 = 40;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub certificate: CertificateConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub courses: Option<Vec<CertificateType>>,

    #[serde(skip)]
    resolved_courses: Vec<CertificateType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateConfig {
    pub signature_label: Option<String>,
    pub workload_hours: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub json_sidecar: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CertError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        let config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| CertError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        Ok(config.resolved())
    }

    /// 未提供課程清單時使用預設清單
    pub fn resolved(mut self) -> Self {
        self.resolved_courses = self
            .courses
            .clone()
            .unwrap_or_else(default_certificate_types);
        self
    }

    /// 替換環境變數 (例如 ${ISSUER}); 未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR_RE: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR_RE
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_non_empty_string(
            "certificate.signature_label",
            self.signature_label(),
        )?;
        validation::validate_positive_number(
            "certificate.workload_hours",
            self.workload_hours(),
            1,
        )?;

        if self.resolved_courses.is_empty() {
            return Err(CertError::ConfigValidationError {
                field: "courses".to_string(),
                message: "At least one course must be offered".to_string(),
            });
        }

        for course in &self.resolved_courses {
            validation::validate_non_empty_string("courses.id", &course.id)?;
            validation::validate_non_empty_string("courses.label", &course.label)?;
        }

        validation::validate_unique_ids(
            "courses.id",
            self.resolved_courses.iter().map(|c| c.id.as_str()),
        )
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn signature_label(&self) -> &str {
        self.certificate
            .signature_label
            .as_deref()
            .unwrap_or(DEFAULT_SIGNATURE_LABEL)
    }

    fn workload_hours(&self) -> u32 {
        self.certificate
            .workload_hours
            .unwrap_or(DEFAULT_WORKLOAD_HOURS)
    }

    fn certificate_types(&self) -> &[CertificateType] {
        &self.resolved_courses
    }

    fn json_sidecar(&self) -> bool {
        self.output.json_sidecar.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
