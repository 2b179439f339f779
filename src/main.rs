// docsift CLI - classify files, extract fields, reconcile against an application
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use docsift::classify::catalog;
use docsift::extract::{self, form1003};
use docsift::types::{ApplicationSnapshot, DocumentType, ExtractedData, RawDocument};
use docsift::{reconcile, telemetry, DocumentPipeline, PipelineOptions, Severity};

#[derive(Parser, Debug)]
#[command(author, version, about = "Document classification and data extraction for mortgage loan files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit JSON instead of the human-readable summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one or more files and extract their fields
    Classify {
        files: Vec<PathBuf>,
        /// Page cap for the scanned-PDF OCR fallback
        #[arg(long, default_value_t = docsift::config::MAX_OCR_PAGES)]
        max_ocr_pages: usize,
    },
    /// Run field extraction on an already-acquired text file
    Extract {
        file: PathBuf,
        /// Document type tag, e.g. W2 or BANK_STATEMENT
        #[arg(long)]
        doc_type: String,
    },
    /// Compare extracted document data against an application snapshot
    Reconcile {
        /// Application snapshot JSON
        #[arg(long)]
        application: PathBuf,
        /// Extracted document data JSON
        #[arg(long)]
        document: PathBuf,
    },
    /// List the document type catalog
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init("docsift=info")?;
    let cli = Cli::parse();

    match cli.command {
        Command::Classify {
            files,
            max_ocr_pages,
        } => classify_files(files, max_ocr_pages, cli.json).await,
        Command::Extract { file, doc_type } => extract_file(&file, &doc_type, cli.json),
        Command::Reconcile {
            application,
            document,
        } => reconcile_files(&application, &document, cli.json),
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
    }
}

async fn classify_files(files: Vec<PathBuf>, max_ocr_pages: usize, json: bool) -> Result<()> {
    if files.is_empty() {
        bail!("no input files given");
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let media_type = media_type_for(path);
        documents.push(RawDocument::new(bytes, file_name, media_type));
    }

    let mut pipeline = DocumentPipeline::with_options(PipelineOptions { max_ocr_pages });
    let results = pipeline.process_batch(documents).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        println!("📄 {}", result.source_file);
        match &result.failure_reason {
            Some(reason) => println!("   ⚠️  {reason}"),
            None => {
                println!(
                    "   Type: {} ({:.2} confidence)",
                    result.doc_type, result.confidence
                );
                for insight in &result.insights {
                    println!("   {}: {}", insight.label, insight.detail);
                }
            }
        }
    }
    Ok(())
}

fn extract_file(file: &Path, tag: &str, json: bool) -> Result<()> {
    let Some(doc_type) = DocumentType::from_tag(tag) else {
        bail!("unknown document type tag: {tag}");
    };
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    if doc_type == DocumentType::Form1003 {
        let application = form1003::parse_form_1003(&text);
        println!("{}", serde_json::to_string_pretty(&application)?);
        return Ok(());
    }

    let data = extract::extract(&text, doc_type);
    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
    } else if data.is_empty() {
        println!("No fields extracted for {doc_type}");
    } else {
        println!("{}", serde_json::to_string_pretty(&data)?);
    }
    Ok(())
}

fn reconcile_files(application_path: &Path, document_path: &Path, json: bool) -> Result<()> {
    let application: ApplicationSnapshot = serde_json::from_str(
        &fs::read_to_string(application_path)
            .with_context(|| format!("reading {}", application_path.display()))?,
    )
    .context("parsing application snapshot")?;
    let document: ExtractedData = serde_json::from_str(
        &fs::read_to_string(document_path)
            .with_context(|| format!("reading {}", document_path.display()))?,
    )
    .context("parsing extracted document data")?;

    let discrepancies = reconcile::compare(&application, &document);

    if json {
        println!("{}", serde_json::to_string_pretty(&discrepancies)?);
        return Ok(());
    }

    if discrepancies.is_empty() {
        println!("✅ No discrepancies found");
        return Ok(());
    }
    for discrepancy in &discrepancies {
        let icon = match discrepancy.severity {
            Severity::Critical => "❗",
            Severity::Warning => "⚠️ ",
        };
        println!("{icon} {}: {}", discrepancy.label, discrepancy.message);
        println!(
            "   application: {} | document: {} | field: {}",
            discrepancy.application_value, discrepancy.document_value, discrepancy.field_path
        );
    }
    Ok(())
}

fn print_catalog() {
    for doc_type in DocumentType::ALL {
        match catalog::rule_for(*doc_type) {
            Some(rule) => println!(
                "{:<28} {} ({} keywords, {} critical)",
                doc_type.as_tag(),
                doc_type.label(),
                rule.keywords.len(),
                rule.critical.len()
            ),
            None => println!("{:<28} {}", doc_type.as_tag(), doc_type.label()),
        }
    }
}

fn media_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
