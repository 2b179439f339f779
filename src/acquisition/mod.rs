// Text acquisition: turn an uploaded file into plain text
//
// The only I/O-bound stage of the pipeline. Exposed as an async operation so
// callers can cancel by dropping the future; everything downstream of the
// returned text is synchronous and pure.
pub mod ocr;
pub mod pdf_render;
pub mod pdf_text;

use crate::config::NATIVE_TEXT_MIN_CHARS;
use crate::types::{AcquireError, AcquisitionMethod, ExtractedText, RawDocument};

use self::ocr::OcrEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Plain,
    Pdf,
    Image,
}

fn input_kind(document: &RawDocument) -> InputKind {
    let media_type = document.media_type.to_lowercase();
    let extension = document
        .file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    if media_type.starts_with("text/") || extension == "txt" {
        InputKind::Plain
    } else if media_type == "application/pdf" || extension == "pdf" {
        InputKind::Pdf
    } else {
        // Everything else is treated as an image and sent straight to OCR
        InputKind::Image
    }
}

/// Acquire text from one document. PDFs try the native text layer first and
/// fall back to rendering + OCR when the layer is too thin (scanned files).
pub async fn acquire(
    document: &RawDocument,
    engine: &mut OcrEngine,
    max_ocr_pages: usize,
) -> Result<ExtractedText, AcquireError> {
    let source_len = document.bytes.len();

    match input_kind(document) {
        InputKind::Plain => Ok(ExtractedText {
            text: String::from_utf8_lossy(&document.bytes).into_owned(),
            source_len,
            method: AcquisitionMethod::Plain,
        }),
        InputKind::Pdf => {
            let parsed = pdf_text::load(&document.bytes)?;
            let native = pdf_text::extract_all_pages(&parsed)?;

            if native.trim().chars().count() >= NATIVE_TEXT_MIN_CHARS {
                tracing::debug!(
                    file = %document.file_name,
                    chars = native.len(),
                    "using native PDF text layer"
                );
                return Ok(ExtractedText {
                    text: native,
                    source_len,
                    method: AcquisitionMethod::Native,
                });
            }

            // Thin text layer: likely a scanned PDF
            let total_pages = pdf_text::page_count(&parsed);
            let pages = total_pages.min(max_ocr_pages).max(1);
            tracing::debug!(
                file = %document.file_name,
                total_pages,
                ocr_pages = pages,
                "text layer too thin, falling back to OCR"
            );

            let images = pdf_render::render_pages(&document.bytes, pages)?;
            let mut page_texts = Vec::with_capacity(images.len());
            for image in &images {
                let recognized = engine
                    .extract_text(image)
                    .await
                    .map_err(|e| AcquireError::Ocr(e.to_string()))?;
                page_texts.push(recognized);
            }

            Ok(ExtractedText {
                text: page_texts.join(" "),
                source_len,
                method: AcquisitionMethod::Ocr,
            })
        }
        InputKind::Image => {
            let image = image::load_from_memory(&document.bytes)
                .map_err(|e| AcquireError::Unsupported(e.to_string()))?;
            let text = engine
                .extract_text(&image)
                .await
                .map_err(|e| AcquireError::Ocr(e.to_string()))?;

            Ok(ExtractedText {
                text,
                source_len,
                method: AcquisitionMethod::Ocr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, media: &str) -> RawDocument {
        RawDocument::new(Vec::new(), name, media)
    }

    #[test]
    fn routes_by_media_type_then_extension() {
        assert_eq!(input_kind(&raw("notes.txt", "text/plain")), InputKind::Plain);
        assert_eq!(input_kind(&raw("doc.pdf", "application/pdf")), InputKind::Pdf);
        assert_eq!(input_kind(&raw("scan.jpeg", "image/jpeg")), InputKind::Image);
        // Declared media type missing: extension decides
        assert_eq!(input_kind(&raw("statement.pdf", "")), InputKind::Pdf);
        assert_eq!(input_kind(&raw("readme.txt", "")), InputKind::Plain);
        // Unknown types go to OCR rather than being rejected
        assert_eq!(input_kind(&raw("mystery.bin", "")), InputKind::Image);
    }

    #[tokio::test]
    async fn plain_text_passes_through() {
        let doc = RawDocument::new(b"hello there".to_vec(), "notes.txt", "text/plain");
        let mut engine = OcrEngine::new();
        let extracted = acquire(&doc, &mut engine, 5).await.unwrap();
        assert_eq!(extracted.text, "hello there");
        assert_eq!(extracted.method, AcquisitionMethod::Plain);
        assert_eq!(extracted.source_len, 11);
    }

    #[tokio::test]
    async fn corrupted_pdf_is_terminal() {
        let doc = RawDocument::new(b"garbage".to_vec(), "broken.pdf", "application/pdf");
        let mut engine = OcrEngine::new();
        let err = acquire(&doc, &mut engine, 5).await.unwrap_err();
        assert!(matches!(err, AcquireError::UnreadablePdf(_)));
    }

    #[tokio::test]
    async fn undecodable_image_is_unsupported() {
        let doc = RawDocument::new(b"not an image".to_vec(), "mystery.bin", "");
        let mut engine = OcrEngine::new();
        let err = acquire(&doc, &mut engine, 5).await.unwrap_err();
        assert!(matches!(err, AcquireError::Unsupported(_)));
    }
}
