use crate::core::{CertificatePipeline, CertificateRequest, RenderedCertificate};
use crate::utils::error::Result;

pub struct CertificateEngine<P: CertificatePipeline> {
    pipeline: P,
}

impl<P: CertificatePipeline> CertificateEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 驗證並產生憑證內容，但不寫入檔案
    pub async fn preview(&self, request: CertificateRequest) -> Result<RenderedCertificate> {
        tracing::info!("📝 Validating form...");
        let data = self.pipeline.validate(request).await?;

        tracing::info!("🎨 Rendering certificate...");
        self.pipeline.render(data).await
    }

    pub async fn run(&self, request: CertificateRequest) -> Result<String> {
        tracing::info!("Starting certificate generation...");

        let rendered = self.preview(request).await?;

        tracing::info!("💾 Exporting {}...", rendered.file_name);
        let output_path = self.pipeline.export(rendered).await?;
        tracing::info!("📁 Certificate saved to: {}", output_path);

        Ok(output_path)
    }
}
