pub mod engine;
pub mod form;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{CertificateData, CertificateRequest, RenderedCertificate};
pub use crate::domain::ports::{CertificatePipeline, ConfigProvider, Storage};
pub use crate::utils::error::Result;
