#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Duplicate key `{key}' in {list}")]
    DuplicateKey { list: String, key: String },

    #[error("Link `{label}' in {list} has an empty label or href")]
    EmptyLink { list: String, label: String },
}

pub type Result<T> = std::result::Result<T, Error>;
