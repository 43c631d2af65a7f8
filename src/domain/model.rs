use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used when a course id is not in the catalog.
pub const FALLBACK_CERTIFICATE_LABEL: &str = "Certificado";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateType {
    pub id: String,
    pub label: String,
}

impl CertificateType {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// 預設提供的課程／活動清單
pub fn default_certificate_types() -> Vec<CertificateType> {
    vec![
        CertificateType::new("curso-react", "Curso de React"),
        CertificateType::new("curso-node", "Curso de Node.js"),
        CertificateType::new("workshop-ux", "Workshop de UX/UI Design"),
        CertificateType::new("palestra-ia", "Palestra sobre Inteligência Artificial"),
        CertificateType::new("treinamento-gestao", "Treinamento em Gestão de Projetos"),
    ]
}

pub fn find_certificate_type<'a>(
    catalog: &'a [CertificateType],
    id: &str,
) -> Option<&'a CertificateType> {
    catalog.iter().find(|t| t.id == id)
}

pub fn certificate_type_label<'a>(catalog: &'a [CertificateType], id: &str) -> &'a str {
    find_certificate_type(catalog, id)
        .map(|t| t.label.as_str())
        .unwrap_or(FALLBACK_CERTIFICATE_LABEL)
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub course_type: String,
}

/// A request that passed form validation. `cpf` is in canonical (digit-only) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateData {
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub course_type: String,
    pub generated_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct RenderedCertificate {
    pub file_name: String,
    pub media_type: &'static str,
    pub content: String,
    pub data: CertificateData,
}
