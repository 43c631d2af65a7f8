use crate::core::form::validate_request;
use crate::core::render::{render_certificate, RenderOptions};
use crate::core::{
    CertificateData, CertificatePipeline, CertificateRequest, ConfigProvider, RenderedCertificate,
    Storage,
};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub struct SimpleCertificatePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    issue_date: Option<NaiveDate>,
}

impl<S: Storage, C: ConfigProvider> SimpleCertificatePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            issue_date: None,
        }
    }

    /// 固定發證日期 (測試或補發時使用)，預設為今天
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    fn issue_date(&self) -> NaiveDate {
        self.issue_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> CertificatePipeline for SimpleCertificatePipeline<S, C> {
    async fn validate(&self, request: CertificateRequest) -> Result<CertificateData> {
        let data = validate_request(&request, self.config.certificate_types(), self.issue_date())?;
        tracing::debug!(
            "Form accepted for course '{}' issued on {}",
            data.course_type,
            data.generated_date
        );
        Ok(data)
    }

    async fn render(&self, data: CertificateData) -> Result<RenderedCertificate> {
        let options = RenderOptions {
            catalog: self.config.certificate_types(),
            signature_label: self.config.signature_label(),
            workload_hours: self.config.workload_hours(),
        };

        let rendered = render_certificate(&data, &options)?;
        tracing::debug!(
            "Rendered {} ({} bytes, {})",
            rendered.file_name,
            rendered.content.len(),
            rendered.media_type
        );
        Ok(rendered)
    }

    async fn export(&self, certificate: RenderedCertificate) -> Result<String> {
        let output_path = self
            .storage
            .write_file(&certificate.file_name, certificate.content.as_bytes())
            .await?;

        // 額外輸出 JSON 資料檔；失敗時移除已寫入的文件，不留下半套輸出
        if self.config.json_sidecar() {
            if let Err(e) = self.write_sidecar(&certificate).await {
                if let Err(cleanup) = self.storage.remove_file(&certificate.file_name).await {
                    tracing::warn!(
                        "Failed to remove {} after sidecar error: {}",
                        certificate.file_name,
                        cleanup
                    );
                }
                return Err(e);
            }
        }

        Ok(output_path)
    }
}

impl<S: Storage, C: ConfigProvider> SimpleCertificatePipeline<S, C> {
    async fn write_sidecar(&self, certificate: &RenderedCertificate) -> Result<()> {
        let stem = certificate
            .file_name
            .strip_suffix(".svg")
            .unwrap_or(&certificate.file_name);
        let json = serde_json::to_vec_pretty(&certificate.data)?;
        let sidecar_path = self
            .storage
            .write_file(&format!("{}.json", stem), &json)
            .await?;
        tracing::debug!("Certificate data saved to: {}", sidecar_path);
        Ok(())
    }
}
