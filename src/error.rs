use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidInput { field: String, value: String },

    #[error("missing form field: {0}")]
    MissingField(String),

    #[error("Pipeline error: {0}")]
    Pipeline(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }

    /// Input conversion failures get the friendly inline message; everything
    /// else is reported verbatim.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
