//! DOCX raw-text extraction on top of docx-rs.
//!
//! Only the text is kept: headings, list markers and run formatting are dropped. Paragraphs
//! become lines, table rows become lines with tab-separated cells.

use super::TextParser;
use crate::error::{ExtractError, Result};
use crate::models::SupportedKind;

pub struct DocxExtractor;

impl DocxExtractor {
    pub fn extract(bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::UpstreamParse {
            kind: SupportedKind::Docx,
            message: format!("DOCX parse error: {e}"),
        })?;

        let mut text = String::new();

        for child in &docx.document.children {
            let block = match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => Self::extract_paragraph(paragraph),
                docx_rs::DocumentChild::Table(table) => Self::extract_table(table),
                _ => continue,
            };

            if block.trim().is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&block);
        }

        Ok(text)
    }

    fn extract_paragraph(paragraph: &docx_rs::Paragraph) -> String {
        let mut content = String::new();
        Self::push_paragraph_children(&paragraph.children, &mut content);
        content
    }

    fn push_paragraph_children(children: &[docx_rs::ParagraphChild], out: &mut String) {
        for child in children {
            match child {
                docx_rs::ParagraphChild::Run(run) => Self::push_run(run, out),
                docx_rs::ParagraphChild::Hyperlink(link) => {
                    Self::push_paragraph_children(&link.children, out)
                }
                _ => {}
            }
        }
    }

    fn push_run(run: &docx_rs::Run, out: &mut String) {
        for run_child in &run.children {
            match run_child {
                docx_rs::RunChild::Text(text) => out.push_str(&text.text),
                docx_rs::RunChild::Tab(_) => out.push('\t'),
                docx_rs::RunChild::Break(_) => out.push('\n'),
                _ => {}
            }
        }
    }

    fn extract_table(table: &docx_rs::Table) -> String {
        let mut lines: Vec<String> = Vec::new();

        for table_child in &table.rows {
            let docx_rs::TableChild::TableRow(row) = table_child;
            let mut cells: Vec<String> = Vec::new();
            for row_child in &row.cells {
                let docx_rs::TableRowChild::TableCell(cell) = row_child;
                let mut cell_text = String::new();
                for cell_child in &cell.children {
                    if let docx_rs::TableCellContent::Paragraph(para) = cell_child {
                        let para_text = Self::extract_paragraph(para);
                        if para_text.is_empty() {
                            continue;
                        }
                        if !cell_text.is_empty() {
                            cell_text.push(' ');
                        }
                        cell_text.push_str(&para_text);
                    }
                }
                cells.push(cell_text.trim().to_string());
            }
            if cells.iter().any(|c| !c.is_empty()) {
                lines.push(cells.join("\t"));
            }
        }

        lines.join("\n")
    }
}

impl TextParser for DocxExtractor {
    fn kind(&self) -> SupportedKind {
        SupportedKind::Docx
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        Self::extract(bytes)
    }
}
