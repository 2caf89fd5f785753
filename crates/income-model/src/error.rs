use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("feature schema is empty")]
    EmptySchema,
    #[error("feature schema lists '{name}' more than once")]
    DuplicateFeature { name: String },
    #[error("feature schema contains an empty feature name at position {index}")]
    BlankFeature { index: usize },
    #[error("unknown predicted class {value}; expected 0 or 1")]
    UnknownClass { value: u8 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
