use crate::domain::model::{
    CertificateData, CertificateRequest, CertificateType, RenderedCertificate,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn signature_label(&self) -> &str;
    fn workload_hours(&self) -> u32;
    fn certificate_types(&self) -> &[CertificateType];
    fn json_sidecar(&self) -> bool;
}

#[async_trait]
pub trait CertificatePipeline: Send + Sync {
    async fn validate(&self, request: CertificateRequest) -> Result<CertificateData>;
    async fn render(&self, data: CertificateData) -> Result<RenderedCertificate>;
    async fn export(&self, certificate: RenderedCertificate) -> Result<String>;
}
