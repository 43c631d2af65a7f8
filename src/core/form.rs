use crate::domain::model::{
    find_certificate_type, CertificateData, CertificateRequest, CertificateType,
};
use crate::utils::error::{CertError, Result};
use crate::utils::validators::{is_valid_email_syntax, is_valid_identifier, strip_non_digits};
use chrono::NaiveDate;

/// Checks a submitted form and builds the certificate data.
///
/// Fields are checked in form order and the first failure is returned, so the
/// user sees one message at a time.
pub fn validate_request(
    request: &CertificateRequest,
    catalog: &[CertificateType],
    generated_date: NaiveDate,
) -> Result<CertificateData> {
    let cpf = strip_non_digits(&request.cpf);
    if cpf.is_empty() {
        return Err(CertError::validation("cpf", "O CPF é obrigatório"));
    }

    if !is_valid_identifier(&cpf) {
        return Err(CertError::validation("cpf", "CPF inválido"));
    }

    let name = request.name.trim();
    if name.is_empty() {
        return Err(CertError::validation("name", "O nome é obrigatório"));
    }

    // e-mail 不做 trim，前後空白視為格式錯誤
    let email = request.email.as_str();
    if email.is_empty() {
        return Err(CertError::validation("email", "O e-mail é obrigatório"));
    }

    if !is_valid_email_syntax(email) {
        return Err(CertError::validation("email", "E-mail inválido"));
    }

    let course_type = request.course_type.trim();
    if course_type.is_empty() {
        return Err(CertError::validation(
            "course_type",
            "Selecione um curso/palestra/treinamento",
        ));
    }

    if find_certificate_type(catalog, course_type).is_none() {
        return Err(CertError::validation(
            "course_type",
            format!("Curso/palestra/treinamento desconhecido: {}", course_type),
        ));
    }

    Ok(CertificateData {
        cpf,
        name: name.to_string(),
        email: email.to_string(),
        course_type: course_type.to_string(),
        generated_date,
    })
}
