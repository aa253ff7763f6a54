use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Glob(#[from] glob::PatternError),
    #[error("Conversion Error: {0}")]
    Conversion(String),
    #[error("Workbook Error: {0}")]
    Workbook(String),
    #[error("worksheet {0:?} not found")]
    MissingSheet(String),
    #[error("camp check for today already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("no prior camp check and no template at {}", .0.display())]
    TemplateMissing(PathBuf),
    #[error("selection cancelled: {0}")]
    Cancelled(&'static str),
    #[error("Anyhow Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}
