#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed catalog response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bookshelf_core::book::CatalogError> for Error {
    fn from(err: bookshelf_core::book::CatalogError) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
