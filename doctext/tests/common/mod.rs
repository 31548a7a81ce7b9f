#![allow(dead_code)]

use std::io::{Cursor, Write};

use axum::body::Body;
use axum::http::Request;
use axum::Router;

use doctext::api::{create_router, AppState};
use doctext::config::{Config, LimitsConfig, LoggingConfig, ServerConfig};
use doctext::processing::UploadPipeline;

pub const BOUNDARY: &str = "doctext-test-boundary-7MA4YWxkTrZu0gW";

/// One multipart form part.
pub struct Part {
    pub name: &'static str,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Part {
    /// A file under the `document` field.
    pub fn document(filename: &str, content_type: &str, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "document",
            filename: Some(filename.to_string()),
            content_type: Some(content_type.to_string()),
            data: data.into(),
        }
    }

    pub fn field(name: &'static str, value: &str) -> Self {
        Self {
            name,
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        }
    }
}

pub fn multipart_body(parts: &[Part]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        write!(body, "--{BOUNDARY}\r\n").unwrap();
        match &part.filename {
            Some(filename) => write!(
                body,
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                part.name, filename
            )
            .unwrap(),
            None => write!(
                body,
                "Content-Disposition: form-data; name=\"{}\"\r\n",
                part.name
            )
            .unwrap(),
        }
        if let Some(content_type) = &part.content_type {
            write!(body, "Content-Type: {content_type}\r\n").unwrap();
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(&part.data);
        body.extend_from_slice(b"\r\n");
    }
    write!(body, "--{BOUNDARY}--\r\n").unwrap();
    body
}

pub fn upload_request(parts: &[Part]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn test_config(limits: LimitsConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        limits,
        logging: LoggingConfig::default(),
    }
}

pub fn app() -> Router {
    app_with_limits(LimitsConfig::default())
}

pub fn app_with_limits(limits: LimitsConfig) -> Router {
    create_router(AppState::new(test_config(limits)))
}

pub fn app_with_pipeline(pipeline: UploadPipeline) -> Router {
    create_router(AppState::with_pipeline(
        test_config(LimitsConfig::default()),
        pipeline,
    ))
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Builds a ZIP in memory. `None` content adds a directory entry.
pub fn build_zip(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, content) in entries {
            match content {
                Some(bytes) => {
                    zip.start_file(*name, options).expect("Failed to start zip entry");
                    zip.write_all(bytes).expect("Failed to write zip entry");
                }
                None => zip
                    .add_directory(*name, options)
                    .expect("Failed to add zip directory"),
            }
        }
        zip.finish().expect("Failed to finish zip");
    }
    buffer.into_inner()
}

pub fn create_test_docx<F>(builder_fn: F) -> Vec<u8>
where
    F: FnOnce(docx_rs::Docx) -> docx_rs::Docx,
{
    let docx = builder_fn(docx_rs::Docx::new());
    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).expect("Failed to pack DOCX");
    buffer.into_inner()
}

pub fn simple_docx(paragraphs: &[&str]) -> Vec<u8> {
    create_test_docx(|mut docx| {
        for text in paragraphs {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*text)),
            );
        }
        docx
    })
}

/// Builds a one-page PDF showing `text` in Helvetica, with a correct xref table.
pub fn simple_pdf(text: &str) -> Vec<u8> {
    let stream = format!("BT /F1 24 Tf 72 700 Td ({text}) Tj ET");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{stream}\nendstream",
            stream.len()
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        write!(pdf, "{} 0 obj\n{body}\nendobj\n", index + 1).unwrap();
    }

    let xref_offset = pdf.len();
    write!(pdf, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).unwrap();
    for offset in offsets {
        write!(pdf, "{offset:010} 00000 n \n").unwrap();
    }
    write!(
        pdf,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    )
    .unwrap();
    pdf
}
