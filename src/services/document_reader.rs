use crate::{
    errors::{AppError, AppResult},
    models::dto::request::UploadedDocument,
};

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from the file name, then the declared content type,
    /// then the leading bytes.
    pub fn detect(document: &UploadedDocument) -> Option<Self> {
        let extension = document
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => return Some(DocumentKind::Pdf),
            Some("txt") => return Some(DocumentKind::PlainText),
            _ => {}
        }

        match document.content_type.as_deref() {
            Some("application/pdf") => return Some(DocumentKind::Pdf),
            Some(ct) if ct.starts_with("text/") => return Some(DocumentKind::PlainText),
            _ => {}
        }

        document
            .bytes
            .starts_with(PDF_MAGIC)
            .then_some(DocumentKind::Pdf)
    }
}

pub struct DocumentReader {
    max_bytes: usize,
}

impl DocumentReader {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Extracts the text of an uploaded PDF or plain-text file.
    pub fn read(&self, document: &UploadedDocument) -> AppResult<String> {
        if document.bytes.is_empty() {
            return Err(AppError::FileReadError("uploaded file is empty".to_string()));
        }
        if document.bytes.len() > self.max_bytes {
            return Err(AppError::FileReadError(format!(
                "uploaded file is {} bytes, the limit is {}",
                document.bytes.len(),
                self.max_bytes
            )));
        }

        let kind = DocumentKind::detect(document).ok_or_else(|| {
            AppError::FileReadError(
                "unsupported file format, only PDF and text files are supported".to_string(),
            )
        })?;

        let text = match kind {
            DocumentKind::Pdf => extract_pdf_text(&document.bytes)?,
            DocumentKind::PlainText => String::from_utf8(document.bytes.clone())
                .map_err(|_| AppError::FileReadError("text file is not valid UTF-8".to_string()))?,
        };

        if text.trim().is_empty() {
            return Err(AppError::FileReadError(
                "no text could be extracted from the uploaded file".to_string(),
            ));
        }

        log::info!(
            "Extracted {} characters from {:?} upload {}",
            text.chars().count(),
            kind,
            document.file_name.as_deref().unwrap_or("<unnamed>")
        );

        Ok(text)
    }
}

fn extract_pdf_text(bytes: &[u8]) -> AppResult<String> {
    // pdf-extract panics on some malformed files instead of returning an error
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::FileReadError(format!(
            "error reading the PDF file: {}",
            e
        ))),
        Err(_) => Err(AppError::FileReadError(
            "error reading the PDF file: document is malformed".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    fn upload(file_name: Option<&str>, content_type: Option<&str>, bytes: &[u8]) -> UploadedDocument {
        UploadedDocument {
            file_name: file_name.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn detect_prefers_file_extension() {
        let doc = upload(Some("Notes.PDF"), Some("text/plain"), b"hello");
        assert_eq!(DocumentKind::detect(&doc), Some(DocumentKind::Pdf));

        let doc = upload(Some("notes.txt"), Some("application/pdf"), b"hello");
        assert_eq!(DocumentKind::detect(&doc), Some(DocumentKind::PlainText));
    }

    #[test]
    fn detect_falls_back_to_content_type_and_magic() {
        let doc = upload(None, Some("text/markdown"), b"# hi");
        assert_eq!(DocumentKind::detect(&doc), Some(DocumentKind::PlainText));

        let doc = upload(Some("blob"), None, b"%PDF-1.7 ...");
        assert_eq!(DocumentKind::detect(&doc), Some(DocumentKind::Pdf));

        let doc = upload(Some("slides.pptx"), Some("application/octet-stream"), b"PK");
        assert_eq!(DocumentKind::detect(&doc), None);
    }

    #[test]
    fn read_returns_text_file_contents() {
        let reader = DocumentReader::new(1024);
        let doc = upload(Some("notes.txt"), None, "Mitochondria make ATP.".as_bytes());

        assert_eq!(reader.read(&doc).unwrap(), "Mitochondria make ATP.");
    }

    #[test]
    fn read_rejects_unsupported_format() {
        let reader = DocumentReader::new(1024);
        let doc = upload(Some("image.png"), Some("image/png"), b"\x89PNG");

        let err = reader.read(&doc).unwrap_err();
        assert!(err.to_string().contains("only PDF and text files"));
    }

    #[test]
    fn read_rejects_empty_oversized_and_blank_uploads() {
        let reader = DocumentReader::new(8);

        assert!(matches!(
            reader.read(&upload(Some("a.txt"), None, b"")),
            Err(AppError::FileReadError(_))
        ));
        assert!(matches!(
            reader.read(&upload(Some("a.txt"), None, b"more than eight bytes")),
            Err(AppError::FileReadError(_))
        ));
        assert!(matches!(
            reader.read(&upload(Some("a.txt"), None, b"  \n\t ")),
            Err(AppError::FileReadError(_))
        ));
    }

    #[test]
    fn read_rejects_invalid_utf8() {
        let reader = DocumentReader::new(1024);
        let doc = upload(Some("a.txt"), None, &[0xff, 0xfe, 0x41]);

        let err = reader.read(&doc).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn read_extracts_text_from_pdf() {
        let reader = DocumentReader::new(64 * 1024);
        let doc = upload(
            Some("cells.pdf"),
            Some("application/pdf"),
            &fixtures::minimal_pdf("Hello Mitosis"),
        );

        let text = reader.read(&doc).expect("valid PDF should be readable");
        assert!(text.contains("Hello Mitosis"), "extracted {:?}", text);
    }

    #[test]
    fn read_rejects_corrupt_pdf() {
        let reader = DocumentReader::new(1024);
        let doc = upload(Some("broken.pdf"), None, b"%PDF-1.4 truncated");

        assert!(matches!(reader.read(&doc), Err(AppError::FileReadError(_))));
    }
}
