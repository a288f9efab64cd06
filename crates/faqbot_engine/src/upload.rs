use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::{BackendError, FailureKind};

pub const INGEST_POLICY_NAME: &str = "AML Policy";
pub const INGEST_JURISDICTION: &str = "Global";
pub const INGEST_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub async fn read(name: impl Into<String>, path: &Path) -> Result<Self, BackendError> {
        let name = name.into();
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Self { name, bytes }),
            Err(err) => Err(BackendError::new(
                FailureKind::FileRead { name },
                format!("{}: {err}", path.display()),
            )),
        }
    }
}

/// MIME type sent with a file part, by extension.
pub fn mime_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// One `files` part per file, then the fixed metadata fields.
pub fn build_ingest_form(files: Vec<UploadFile>) -> Result<Form, BackendError> {
    let mut form = Form::new();
    for file in files {
        let mime = mime_for(&file.name);
        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(mime)
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        form = form.part("files", part);
    }
    Ok(form
        .text("policy_name", INGEST_POLICY_NAME)
        .text("jurisdiction", INGEST_JURISDICTION)
        .text("version", INGEST_VERSION))
}
