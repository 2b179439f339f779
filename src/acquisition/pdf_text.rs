// Native PDF text-layer extraction with lopdf
//
// Walks each page's decompressed content streams and collects the text shown
// by Tj and TJ operators. Good enough for digitally-produced PDFs; scanned
// PDFs come out (near) empty and get routed to OCR by the caller.
use lopdf::{Dictionary, Document, Object};

use crate::types::AcquireError;

/// Parse a PDF from memory. Any parse failure (corrupted file, encryption)
/// is terminal for the document.
pub fn load(bytes: &[u8]) -> Result<Document, AcquireError> {
    Document::load_mem(bytes).map_err(|e| AcquireError::UnreadablePdf(e.to_string()))
}

/// Extract the text layer of every page, concatenated with a single
/// separating space between pages.
pub fn extract_all_pages(document: &Document) -> Result<String, AcquireError> {
    let mut pages_text = Vec::new();
    for (_number, page_id) in document.get_pages() {
        let page_dict = document
            .get_object(page_id)
            .and_then(Object::as_dict)
            .map_err(|e| AcquireError::UnreadablePdf(e.to_string()))?;
        pages_text.push(page_text(document, page_dict)?);
    }
    Ok(pages_text.join(" "))
}

pub fn page_count(document: &Document) -> usize {
    document.get_pages().len()
}

// Extract text from one page's content streams
fn page_text(document: &Document, page: &Dictionary) -> Result<String, AcquireError> {
    let mut text = String::new();

    if let Ok(contents) = page.get(b"Contents") {
        let content_data = content_data(document, contents)?;
        let content_str = String::from_utf8_lossy(&content_data);

        for line in content_str.lines() {
            if line.contains("Tj") {
                if let Some(shown) = text_from_tj(line) {
                    text.push_str(&shown);
                    text.push(' ');
                }
            } else if line.contains("TJ") {
                if let Some(shown) = text_from_tj_array(line) {
                    text.push_str(&shown);
                    text.push(' ');
                }
            }
        }
    }

    Ok(text.trim_end().to_string())
}

// Resolve a Contents entry to raw bytes, following references and arrays
fn content_data(document: &Document, contents: &Object) -> Result<Vec<u8>, AcquireError> {
    match contents {
        Object::Reference(r) => {
            let obj = document
                .get_object(*r)
                .map_err(|e| AcquireError::UnreadablePdf(e.to_string()))?;
            content_data(document, obj)
        }
        Object::Stream(stream) => stream
            .decompressed_content()
            .map_err(|e| AcquireError::UnreadablePdf(e.to_string())),
        Object::Array(arr) => {
            let mut data = Vec::new();
            for item in arr {
                data.extend_from_slice(&content_data(document, item)?);
            }
            Ok(data)
        }
        _ => Ok(Vec::new()),
    }
}

// Extract text shown by a Tj operator
fn text_from_tj(line: &str) -> Option<String> {
    let start = line.find('(')?;
    let end = line.rfind(')')?;
    if end > start {
        Some(decode_pdf_string(&line[start + 1..end]))
    } else {
        None
    }
}

// Extract text shown by a TJ array operator
fn text_from_tj_array(line: &str) -> Option<String> {
    let start = line.find('[')?;
    let end = line.rfind(']')?;
    if end <= start {
        return None;
    }

    let mut result = String::new();
    let mut in_string = false;
    let mut current = String::new();
    for ch in line[start + 1..end].chars() {
        if ch == '(' {
            in_string = true;
            current.clear();
        } else if ch == ')' && in_string {
            in_string = false;
            result.push_str(&decode_pdf_string(&current));
        } else if in_string {
            current.push(ch);
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

// Basic PDF literal-string decoder (escape sequences only)
fn decode_pdf_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                match next {
                    'n' => result.push('\n'),
                    'r' => result.push('\r'),
                    't' => result.push('\t'),
                    '\\' => result.push('\\'),
                    '(' => result.push('('),
                    ')' => result.push(')'),
                    other => result.push(other),
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use lopdf::Stream;

    // Build a minimal single-page PDF carrying one text-show operation
    fn sample_pdf(shown: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = format!("BT /F1 24 Tf 72 720 Td ({shown}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn extracts_text_shown_by_tj() {
        let bytes = sample_pdf("hello from the text layer");
        let document = load(&bytes).unwrap();
        assert_eq!(page_count(&document), 1);
        let text = extract_all_pages(&document).unwrap();
        assert!(text.contains("hello from the text layer"), "got: {text}");
    }

    #[test]
    fn corrupted_bytes_are_unreadable() {
        let err = load(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, AcquireError::UnreadablePdf(_)));
    }

    #[test]
    fn decodes_escape_sequences() {
        assert_eq!(decode_pdf_string(r"a\(b\)c"), "a(b)c");
        assert_eq!(decode_pdf_string(r"line\nbreak"), "line\nbreak");
    }
}
