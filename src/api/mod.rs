mod client;
mod error;
mod types;

pub use client::{Client, FREE_API_URL, PRO_API_URL};
pub use error::{Error, ErrorKind};
pub use types::{
    Formality, LanguageCatalog, LanguageDirection, SplitSentences, Translation,
    TranslationOptions, TranslationResult, UsageInformation,
};
