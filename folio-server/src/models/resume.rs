//! Accepted resume document types

use super::ValidationError;

/// Document formats accepted for resume upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeKind {
    Pdf,
    Doc,
    Docx,
}

impl ResumeKind {
    /// Resolve from the declared content type, falling back to the file
    /// extension when the browser sends `application/octet-stream`.
    pub fn detect(content_type: Option<&str>, filename: &str) -> Result<Self, ValidationError> {
        let by_mime = content_type.and_then(|ct| {
            match ct.split(';').next().unwrap_or("").trim() {
                "application/pdf" => Some(Self::Pdf),
                "application/msword" => Some(Self::Doc),
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                    Some(Self::Docx)
                }
                _ => None,
            }
        });

        if let Some(kind) = by_mime {
            return Ok(kind);
        }

        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "doc" => Ok(Self::Doc),
            "docx" => Ok(Self::Docx),
            _ => Err(ValidationError::InvalidFormat {
                field: "file",
                reason: "resume must be a PDF, DOC or DOCX document",
            }),
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
        }
    }
}

/// Keep only the final path component and strip characters that would
/// break a Content-Disposition header.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .take(255)
        .collect();

    if cleaned.trim().is_empty() {
        "resume".to_string()
    } else {
        cleaned.trim().to_string()
    }
}
