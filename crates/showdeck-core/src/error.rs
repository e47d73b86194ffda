use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Index {index} is out of range for {len} records")]
    OutOfRange { index: usize, len: usize },

    #[error("Record list is empty")]
    EmptyRecordSet,

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Deck parsing error: {0}")]
    DeckParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
