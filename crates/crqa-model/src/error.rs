use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown workbook kind: {0}")]
    WorkbookKind(String),
    #[error("unknown change code: {0}")]
    ChangeCode(String),
    #[error("unknown facet kind: {0}")]
    FacetKind(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
