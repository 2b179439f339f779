// Document pipeline: acquisition -> classification -> extraction
//
// Infallible per document: acquisition failures become terminal results
// (type OTHER, confidence 0, failure reason set) instead of errors, so a
// batch of N documents always yields N results.
use crate::acquisition::{self, ocr::OcrEngine};
use crate::classify;
use crate::config::MAX_OCR_PAGES;
use crate::extract::{self, form1003};
use crate::types::{
    Classification, ClassificationResult, DocumentType, ExtractedData, ExtractedText, Insight,
    RawDocument,
};

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub max_ocr_pages: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_ocr_pages: MAX_OCR_PAGES,
        }
    }
}

pub struct DocumentPipeline {
    engine: OcrEngine,
    options: PipelineOptions,
}

impl DocumentPipeline {
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            engine: OcrEngine::new(),
            options,
        }
    }

    /// Run one document through the full pipeline. Never fails: unreadable
    /// input produces a terminal result carrying the failure reason.
    pub async fn process(&mut self, document: RawDocument) -> ClassificationResult {
        tracing::info!(file = %document.file_name, bytes = document.bytes.len(), "processing document");

        let acquired =
            acquisition::acquire(&document, &mut self.engine, self.options.max_ocr_pages).await;
        match acquired {
            Ok(extracted_text) => self.finish(document, extracted_text),
            Err(err) => {
                tracing::warn!(file = %document.file_name, error = %err, "acquisition failed");
                ClassificationResult {
                    source_file: document.file_name,
                    doc_type: DocumentType::Other,
                    confidence: 0.0,
                    text: String::new(),
                    method: None,
                    failure_reason: Some(err.user_message()),
                    insights: Vec::new(),
                    extracted: None,
                }
            }
        }
    }

    /// Run a batch sequentially: N documents in, N results out, each outcome
    /// independent of the others.
    pub async fn process_batch(&mut self, documents: Vec<RawDocument>) -> Vec<ClassificationResult> {
        let mut results = Vec::with_capacity(documents.len());
        for document in documents {
            results.push(self.process(document).await);
        }
        results
    }

    fn finish(&self, document: RawDocument, extracted_text: ExtractedText) -> ClassificationResult {
        let classification = classify::classify(&extracted_text.text, &document.file_name);

        let extracted = if classification.failure_reason.is_none() {
            let data = match classification.doc_type {
                // The application form gets the specialized full parse
                DocumentType::Form1003 => {
                    form1003::parse_form_1003(&extracted_text.text).to_extracted_data()
                }
                doc_type => extract::extract(&extracted_text.text, doc_type),
            };
            if data.is_empty() {
                None
            } else {
                Some(data)
            }
        } else {
            None
        };

        let insights = build_insights(&classification, &extracted_text, extracted.as_ref());

        ClassificationResult {
            source_file: document.file_name,
            doc_type: classification.doc_type,
            confidence: classification.confidence,
            text: extracted_text.text,
            method: Some(extracted_text.method),
            failure_reason: classification.failure_reason,
            insights,
            extracted,
        }
    }
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

fn build_insights(
    classification: &Classification,
    extracted_text: &ExtractedText,
    extracted: Option<&ExtractedData>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if classification.failure_reason.is_some() {
        return insights;
    }

    insights.push(Insight {
        label: "Document type".to_string(),
        detail: format!(
            "{} ({:.0}% confidence)",
            classification.doc_type.label(),
            classification.confidence * 100.0
        ),
    });
    insights.push(Insight {
        label: "Text source".to_string(),
        detail: match extracted_text.method {
            crate::types::AcquisitionMethod::Plain => "plain text file".to_string(),
            crate::types::AcquisitionMethod::Native => "PDF text layer".to_string(),
            crate::types::AcquisitionMethod::Ocr => "optical character recognition".to_string(),
        },
    });

    let Some(data) = extracted else {
        return insights;
    };

    if let Some(employment) = &data.employment {
        if let Some(income) = employment.monthly_income {
            insights.push(Insight {
                label: "Monthly income".to_string(),
                detail: format!("${income:.2}"),
            });
        }
        if let Some(employer) = &employment.employer_name {
            insights.push(Insight {
                label: "Employer".to_string(),
                detail: employer.clone(),
            });
        }
    }
    if !data.assets.is_empty() {
        let total: f64 = data.assets.iter().filter_map(|a| a.balance).sum();
        insights.push(Insight {
            label: "Assets".to_string(),
            detail: format!("{} account(s) totaling ${total:.2}", data.assets.len()),
        });
    }
    if let Some(date) = data.document_date {
        insights.push(Insight {
            label: "Document date".to_string(),
            detail: date.to_string(),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str, text: &str) -> RawDocument {
        RawDocument::new(text.as_bytes().to_vec(), name, "text/plain")
    }

    #[tokio::test]
    async fn classifies_and_extracts_a_w2() {
        let text = "form w-2 wage and tax statement tax year 2023\n\
                    wages, tips, other compensation: $60,000.00\n\
                    employee ssn 123-45-6789";
        let mut pipeline = DocumentPipeline::new();
        let result = pipeline.process(plain("w2-2023.txt", text)).await;

        assert_eq!(result.doc_type, DocumentType::W2);
        assert_eq!(result.confidence, 1.0);
        assert!(result.failure_reason.is_none());
        let extracted = result.extracted.unwrap();
        assert_eq!(extracted.employment.unwrap().monthly_income, Some(5000.0));
        assert!(!result.insights.is_empty());
    }

    #[tokio::test]
    async fn unreadable_file_yields_terminal_result() {
        let doc = RawDocument::new(b"garbage".to_vec(), "broken.pdf", "application/pdf");
        let mut pipeline = DocumentPipeline::new();
        let result = pipeline.process(doc).await;

        assert_eq!(result.doc_type, DocumentType::Other);
        assert_eq!(result.confidence, 0.0);
        assert!(result.failure_reason.is_some());
        assert!(result.text.is_empty());
        assert!(result.extracted.is_none());
    }

    #[tokio::test]
    async fn batch_always_yields_one_result_per_input() {
        let docs = vec![
            plain("w2.txt", "form w-2 wage and tax statement for the current tax year"),
            RawDocument::new(b"junk".to_vec(), "broken.pdf", "application/pdf"),
            plain("tiny.txt", "abc"),
        ];
        let mut pipeline = DocumentPipeline::new();
        let results = pipeline.process_batch(docs).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].doc_type, DocumentType::W2);
        assert!(results[1].failure_reason.is_some());
        assert_eq!(results[2].confidence, 0.0);
    }

    #[tokio::test]
    async fn form_1003_gets_the_full_parse() {
        let text = "uniform residential loan application\n\
                    borrower's name: jane q doe\n\
                    employer or business name: initech llc\n\
                    base income $ 7,200.00";
        let mut pipeline = DocumentPipeline::new();
        let result = pipeline.process(plain("application.txt", text)).await;

        assert_eq!(result.doc_type, DocumentType::Form1003);
        let extracted = result.extracted.unwrap();
        assert_eq!(
            extracted.employment.unwrap().employer_name.as_deref(),
            Some("initech llc")
        );
        assert_eq!(extracted.borrower.unwrap().first_name.as_deref(), Some("jane"));
    }
}
