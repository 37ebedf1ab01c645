//! Text extraction from uploaded TXT, PDF, and DOCX files.
//!
//! Extraction never fails: malformed or unrecognized input degrades to the
//! empty string (logged at warn), which flows through the pipeline as zero
//! scores rather than aborting the batch.

use std::io::{Cursor, Read};

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;
use zip::ZipArchive;

/// A file as received from multipart intake: display name plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// A named blob of text extracted from one upload. Immutable once created.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Txt,
    Pdf,
    Docx,
    Unknown,
}

fn kind_of(name: &str) -> FileKind {
    match name.rsplit('.').next().map(|ext| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "txt" => FileKind::Txt,
        Some(ext) if ext == "pdf" => FileKind::Pdf,
        Some(ext) if ext == "docx" => FileKind::Docx,
        _ => FileKind::Unknown,
    }
}

/// Extracts raw text from an upload, dispatching on the file extension
/// (case-insensitive). Unrecognized extensions fall back to best-effort
/// text decoding.
pub fn extract_document(file: &UploadedFile) -> Document {
    let raw_text = match kind_of(&file.name) {
        FileKind::Txt | FileKind::Unknown => decode_text(&file.bytes),
        FileKind::Pdf => extract_pdf(&file.name, &file.bytes),
        FileKind::Docx => extract_docx(&file.name, &file.bytes),
    };
    Document {
        name: file.name.clone(),
        raw_text,
    }
}

/// Decodes bytes as UTF-8, falling back to Latin-1 (every byte maps to a
/// char, so this can never fail).
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn extract_pdf(name: &str, bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction failed for '{name}': {e}");
            String::new()
        }
    }
}

/// Pulls the visible text out of a DOCX file: unzip, read
/// `word/document.xml`, collect text runs with one newline per paragraph.
fn extract_docx(name: &str, bytes: &[u8]) -> String {
    let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
        Ok(a) => a,
        Err(e) => {
            warn!("DOCX is not a readable zip archive ('{name}'): {e}");
            return String::new();
        }
    };

    let mut xml = String::new();
    match archive.by_name("word/document.xml") {
        Ok(mut entry) => {
            if let Err(e) = entry.read_to_string(&mut xml) {
                warn!("DOCX document.xml is not readable ('{name}'): {e}");
                return String::new();
            }
        }
        Err(e) => {
            warn!("DOCX has no word/document.xml ('{name}'): {e}");
            return String::new();
        }
    }

    document_xml_text(name, &xml)
}

fn document_xml_text(name: &str, xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                if let Ok(text) = t.unescape() {
                    out.push_str(&text);
                }
            }
            // paragraph boundary
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            // explicit line break / tab inside a run
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => out.push('\n'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => out.push(' '),
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("DOCX XML parse error ('{name}'): {e}");
                break;
            }
            _ => {}
        }
    }
    out
}
