pub mod campcheck;
pub mod cell;
pub mod convert;
pub mod dialog;
pub mod due_in;
pub mod error;
pub mod expire;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod settings;

pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
