//! Document loading for the analyze flow
//!
//! Resumes arrive as PDF, plain text, or Markdown; job descriptions as plain
//! text or Markdown. [`DocumentReader`] detects the format from the file
//! extension, extracts plain text, and caches the result so the same file is
//! parsed once per run.

use crate::error::{Result, SkillGapError};
use log::{debug, info};
use pulldown_cmark::{Event, Parser, Tag};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Pdf,
    PlainText,
    Markdown,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| {
                SkillGapError::UnsupportedFormat(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "txt" => Ok(DocumentFormat::PlainText),
            "md" | "markdown" => Ok(DocumentFormat::Markdown),
            other => Err(SkillGapError::UnsupportedFormat(format!(
                ".{} files are not supported (use pdf, txt, or md): {}",
                other,
                path.display()
            ))),
        }
    }
}

/// Reads analysis input documents, caching extracted text per path
pub struct DocumentReader {
    cache: HashMap<PathBuf, String>,
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Extract the plain text of the document at `path`
    pub async fn read(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cache.get(path) {
            debug!("Reusing extracted text for {}", path.display());
            return Ok(text.clone());
        }

        if !path.exists() {
            return Err(SkillGapError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = DocumentFormat::from_path(path)?;
        info!("Extracting text from {} ({:?})", path.display(), format);

        let text = match format {
            DocumentFormat::Pdf => {
                let bytes = fs::read(path).await?;
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                    SkillGapError::PdfExtraction(format!(
                        "Could not read PDF {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            DocumentFormat::PlainText => fs::read_to_string(path).await?,
            DocumentFormat::Markdown => {
                let markdown = fs::read_to_string(path).await?;
                markdown_to_text(&markdown)
            }
        };

        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Flatten Markdown to its visible text. Inline formatting markers are
/// dropped; paragraph, heading, and list-item boundaries become line breaks.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_by_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("cv.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("notes.markdown")).unwrap(),
            DocumentFormat::Markdown
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("cv.docx")),
            Err(SkillGapError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            DocumentFormat::from_path(Path::new("cv")),
            Err(SkillGapError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_markdown_markers_are_dropped() {
        let text =
            markdown_to_text("# Profile\n\nWorked with **Rust** and `tokio`.\n\n- Python\n- SQL\n");

        assert!(text.contains("Profile"));
        // Inline emphasis and code spans flow into the surrounding sentence
        assert!(text.contains("Worked with Rust and tokio."));
        assert!(text.contains("Python"));
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_markdown_block_boundaries_become_lines() {
        let text = markdown_to_text("first paragraph\n\nsecond paragraph");
        assert_eq!(text, "first paragraph\nsecond paragraph");
    }
}
