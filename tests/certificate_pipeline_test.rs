use anyhow::Result;
use certgen::core::{CertificatePipeline, CertificateRequest, Storage};
use certgen::{CertError, CertificateEngine, LocalStorage, SimpleCertificatePipeline, TomlConfig};
use chrono::NaiveDate;
use tempfile::TempDir;

fn request() -> CertificateRequest {
    CertificateRequest {
        cpf: "529.982.247-25".to_string(),
        name: "Maria da Silva".to_string(),
        email: "maria@exemplo.com".to_string(),
        course_type: "curso-node".to_string(),
    }
}

fn settings(output_path: &str, json_sidecar: bool) -> Result<TomlConfig> {
    let content = format!(
        r#"
[certificate]
workload_hours = 20

[output]
path = "{}"
json_sidecar = {}
"#,
        output_path.replace('\\', "/"),
        json_sidecar
    );
    Ok(TomlConfig::from_toml_str(&content)?)
}

#[tokio::test]
async fn test_end_to_end_certificate_generation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SimpleCertificatePipeline::new(storage, settings(&output_path, true)?)
        .with_issue_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    let engine = CertificateEngine::new(pipeline);

    let written = engine.run(request()).await?;
    assert!(written.ends_with("certificado-maria-da-silva.svg"));

    let svg = std::fs::read_to_string(temp_dir.path().join("certificado-maria-da-silva.svg"))?;
    assert!(svg.contains("Maria da Silva"));
    assert!(svg.contains("portador(a) do CPF 529.982.247-25"));
    assert!(svg.contains("Curso de Node.js"));
    assert!(svg.contains("com carga horária total de 20 horas."));
    assert!(svg.contains("Documento emitido em 31/01/2025"));

    let sidecar = std::fs::read(temp_dir.path().join("certificado-maria-da-silva.json"))?;
    let json: serde_json::Value = serde_json::from_slice(&sidecar)?;
    assert_eq!(json["cpf"], "52998224725");
    assert_eq!(json["course_type"], "curso-node");
    assert_eq!(json["generated_date"], "2025-01-31");

    Ok(())
}

#[tokio::test]
async fn test_long_multibyte_name_is_exported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SimpleCertificatePipeline::new(storage, settings(&output_path, true)?);
    let engine = CertificateEngine::new(pipeline);

    let mut long_name = request();
    long_name.name = "Maria da Conceição Gonçalves Assunção Magalhães ".repeat(5);

    let written = engine.run(long_name).await?;
    let file_name = std::path::Path::new(&written)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap()
        .to_string();
    assert!(file_name.starts_with("certificado-maria-da-conceição-"));
    assert!(file_name.ends_with(".svg"));
    assert!(file_name.len() < 255);

    // 文件內仍是完整姓名
    let svg = std::fs::read_to_string(&written)?;
    assert!(svg.contains("Magalhães Maria da Conceição"));

    let json_name = file_name.replace(".svg", ".json");
    assert!(temp_dir.path().join(json_name).exists());

    Ok(())
}

#[tokio::test]
async fn test_invalid_form_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SimpleCertificatePipeline::new(storage, settings(&output_path, false)?);
    let engine = CertificateEngine::new(pipeline);

    let mut bad = request();
    bad.cpf = "111.111.111-11".to_string();

    match engine.run(bad).await {
        Err(CertError::ValidationError { field, message }) => {
            assert_eq!(field, "cpf");
            assert_eq!(message, "CPF inválido");
        }
        other => panic!("expected CPF validation error, got {:?}", other),
    }

    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_preview_does_not_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SimpleCertificatePipeline::new(storage, settings(&output_path, false)?);
    let engine = CertificateEngine::new(pipeline);

    let rendered = engine.preview(request()).await?;
    assert_eq!(rendered.file_name, "certificado-maria-da-silva.svg");
    assert_eq!(rendered.data.name, "Maria da Silva");
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_pipeline_steps_with_custom_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[output]
path = "{}"

[[courses]]
id = "oficina-rust"
label = "Oficina de Rust"
"#,
        output_path.replace('\\', "/")
    ))?;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SimpleCertificatePipeline::new(storage.clone(), config);

    // 預設清單中的課程不在自訂清單內
    assert!(pipeline.validate(request()).await.is_err());

    let mut custom = request();
    custom.course_type = "oficina-rust".to_string();
    let data = pipeline.validate(custom).await?;
    let rendered = pipeline.render(data).await?;
    assert!(rendered.content.contains("Oficina de Rust"));

    pipeline.export(rendered).await?;
    let bytes = storage.read_file("certificado-maria-da-silva.svg").await?;
    assert!(String::from_utf8(bytes)?.contains("Oficina de Rust"));

    Ok(())
}
