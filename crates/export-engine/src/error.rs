use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to assemble PDF: {0}")]
    Pdf(String),

    #[error("Failed to assemble DOCX: {0}")]
    Docx(String),
}
