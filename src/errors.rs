use itertools::Itertools;
use thiserror::Error;

use crate::enums::Language;

/// Top-level error type for the bingo service and its binaries
#[derive(Error, Debug, Clone)]
pub enum BingoError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// A card line that failed validation while loading cards from text.
///
/// Every variant carries the 1-based line number; the rendered message is what
/// the front end shows to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardLineError {
    #[error("Línea {line}: Se encontró un cartón sin jugador asignado (falta Jx antes).")]
    MissingPlayer { line: usize },

    #[error("Línea {line}: Idioma desconocido en ID '{card_id}'.")]
    UnknownLanguage { line: usize, card_id: String },

    #[error(
        "Línea {line}: ID '{card_id}' inválido. Debe tener exactamente 6 dígitos numéricos \
         después del código de idioma (ej: {prefix}123456)."
    )]
    InvalidId {
        line: usize,
        card_id: String,
        prefix: String,
    },

    #[error("Línea {line}: ID '{card_id}' ya existe en cartones cargados previamente.")]
    AlreadyLoaded { line: usize, card_id: String },

    #[error("Línea {line}: ID '{card_id}' está duplicado en este archivo/texto.")]
    DuplicateInLoad { line: usize, card_id: String },

    #[error("Línea {line} ({card_id}): Palabras repetidas en el cartón: [{}]", .words.iter().join(", "))]
    RepeatedWords {
        line: usize,
        card_id: String,
        words: Vec<String>,
    },

    #[error("Línea {line} ({card_id}): Excede límite de {limit} palabras.")]
    TooManyWords {
        line: usize,
        card_id: String,
        limit: usize,
    },

    #[error("Línea {line}: Banco de palabras no cargado para {language}.")]
    BankNotLoaded { line: usize, language: Language },

    #[error("Línea {line} ({card_id}): Palabras no permitidas [{}]", .words.iter().join(", "))]
    WordsNotInBank {
        line: usize,
        card_id: String,
        words: Vec<String>,
    },
}

impl CardLineError {
    pub fn line(&self) -> usize {
        match self {
            CardLineError::MissingPlayer { line }
            | CardLineError::UnknownLanguage { line, .. }
            | CardLineError::InvalidId { line, .. }
            | CardLineError::AlreadyLoaded { line, .. }
            | CardLineError::DuplicateInLoad { line, .. }
            | CardLineError::RepeatedWords { line, .. }
            | CardLineError::TooManyWords { line, .. }
            | CardLineError::BankNotLoaded { line, .. }
            | CardLineError::WordsNotInBank { line, .. } => *line,
        }
    }
}

/// Card records received from a client that break the card invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardStateError {
    #[error("Card {card_id}: words are not in strictly ascending order")]
    UnorderedWords { card_id: String },

    #[error("Card {card_id}: {marked} marks for {words} words")]
    MarkCountMismatch {
        card_id: String,
        words: usize,
        marked: usize,
    },

    #[error("Card {card_id}: hit counter is {hits} but {counted} words are marked")]
    HitCountMismatch {
        card_id: String,
        hits: usize,
        counted: usize,
    },

    #[error("Card {card_id}: limit is {limit} but the card holds {words} words")]
    LimitMismatch {
        card_id: String,
        limit: usize,
        words: usize,
    },
}

/// Infrastructure errors (word bank files, configuration, sockets)
#[derive(Error, Debug, Clone)]
pub enum InfrastructureError {
    #[error("Word bank error for {path}: {details}")]
    WordBank { path: String, details: String },

    #[error("Configuration error: {details}")]
    Configuration { details: String },

    #[error("Server error: {details}")]
    Server { details: String },

    #[error("Cards file error for {path}: {details}")]
    CardsFile { path: String, details: String },
}

/// Result type aliases for convenience
pub type BingoResult<T> = Result<T, BingoError>;
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl InfrastructureError {
    pub fn word_bank(path: impl Into<String>, details: impl ToString) -> Self {
        Self::WordBank {
            path: path.into(),
            details: details.to_string(),
        }
    }

    pub fn configuration(details: impl Into<String>) -> Self {
        Self::Configuration {
            details: details.into(),
        }
    }

    pub fn server(details: impl ToString) -> Self {
        Self::Server {
            details: details.to_string(),
        }
    }

    pub fn cards_file(path: impl Into<String>, details: impl ToString) -> Self {
        Self::CardsFile {
            path: path.into(),
            details: details.to_string(),
        }
    }
}
