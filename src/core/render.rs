use crate::domain::model::{
    certificate_type_label, CertificateData, CertificateType, RenderedCertificate,
};
use crate::utils::error::{CertError, Result};
use crate::utils::formatting::{certificate_file_stem, format_date, xml_escape};
use crate::utils::validators::{format_identifier, IDENTIFIER_LENGTH};
use std::fmt::Write;

pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

// A4 橫向，96 dpi
const PAGE_WIDTH: u32 = 1123;
const PAGE_HEIGHT: u32 = 794;

/// Text settings that do not come from the form.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub catalog: &'a [CertificateType],
    pub signature_label: &'a str,
    pub workload_hours: u32,
}

struct TextLine {
    y: u32,
    size: u32,
    fill: &'static str,
    serif: bool,
    text: String,
}

impl TextLine {
    fn new(y: u32, size: u32, fill: &'static str, serif: bool, text: impl Into<String>) -> Self {
        Self {
            y,
            size,
            fill,
            serif,
            text: text.into(),
        }
    }
}

/// Renders the certificate as a standalone SVG document.
pub fn render_certificate(
    data: &CertificateData,
    options: &RenderOptions<'_>,
) -> Result<RenderedCertificate> {
    // CPF 必須是標準形式 (11 位數字)
    if data.cpf.len() != IDENTIFIER_LENGTH || !data.cpf.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CertError::RenderError {
            message: format!("certificate data holds a non-canonical CPF '{}'", data.cpf),
        });
    }

    let course = certificate_type_label(options.catalog, &data.course_type);
    let lines = [
        TextLine::new(150, 16, "#6b7280", false, "CERTIFICADO DE CONCLUSÃO"),
        TextLine::new(200, 34, "#1e3a8a", true, course),
        TextLine::new(290, 18, "#4b5563", false, "Certificamos que"),
        TextLine::new(340, 30, "#1e3a8a", true, data.name.as_str()),
        TextLine::new(
            385,
            18,
            "#4b5563",
            false,
            format!("portador(a) do CPF {}", format_identifier(&data.cpf)),
        ),
        TextLine::new(
            425,
            18,
            "#4b5563",
            false,
            "participou e concluiu com sucesso o",
        ),
        TextLine::new(470, 24, "#1e3a8a", false, course),
        TextLine::new(
            515,
            18,
            "#4b5563",
            false,
            format!(
                "com carga horária total de {} horas.",
                options.workload_hours
            ),
        ),
        TextLine::new(
            600,
            14,
            "#6b7280",
            false,
            format!("Documento emitido em {}", format_date(data.generated_date)),
        ),
        TextLine::new(690, 14, "#4b5563", false, options.signature_label),
    ];

    let svg = write_svg(&lines).map_err(|e| CertError::RenderError {
        message: format!("failed to write SVG document: {}", e),
    })?;

    Ok(RenderedCertificate {
        file_name: format!("{}.svg", certificate_file_stem(&data.name)),
        media_type: SVG_MEDIA_TYPE,
        content: svg,
        data: data.clone(),
    })
}

fn write_svg(lines: &[TextLine]) -> std::result::Result<String, std::fmt::Error> {
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = PAGE_WIDTH,
        h = PAGE_HEIGHT
    )?;
    writeln!(svg, r##"  <rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    writeln!(
        svg,
        r##"  <rect x="40" y="40" width="{}" height="{}" fill="none" stroke="#d1d5db" stroke-width="2"/>"##,
        PAGE_WIDTH - 80,
        PAGE_HEIGHT - 80
    )?;
    writeln!(
        svg,
        r##"  <line x1="120" y1="560" x2="{}" y2="560" stroke="#e5e7eb"/>"##,
        PAGE_WIDTH - 120
    )?;

    for line in lines {
        let family = if line.serif {
            "Georgia, serif"
        } else {
            "Helvetica, Arial, sans-serif"
        };
        writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
            PAGE_WIDTH / 2,
            line.y,
            family,
            line.size,
            line.fill,
            xml_escape(&line.text)
        )?;
    }

    // 簽名線
    writeln!(
        svg,
        r##"  <line x1="{}" y1="665" x2="{}" y2="665" stroke="#9ca3af"/>"##,
        PAGE_WIDTH / 2 - 100,
        PAGE_WIDTH / 2 + 100
    )?;
    svg.push_str("</svg>\n");

    Ok(svg)
}
