use serde::Deserialize;
use std::collections::BTreeMap;

/// API usage and limits for the account.
///
/// The field names follow the service's JSON. `character_count` is what the
/// current billing period has used so far, `character_limit` is the
/// allowance for the whole period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UsageInformation {
    pub character_count: u64,
    pub character_limit: u64,
}

/// Language code (e.g. `"DE"`) to display name (e.g. `"German"`).
pub type LanguageCatalog = BTreeMap<String, String>;

/// Which side of a translation a language list describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageDirection {
    Source,
    Target,
}

impl LanguageDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageEntry {
    pub language: String,
    pub name: String,
}

/// One translated text, in the same position as its input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    /// Source language as given, or as detected by the service.
    pub detected_source_language: String,
    pub text: String,
}

pub type TranslationResult = Vec<Translation>;

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub translations: TranslationResult,
}

/// Controls how the input is split into sentences before translation.
///
/// The wire values are the ones the service documents (`"0"`, `"nonewlines"`,
/// `"1"`). They intentionally differ from older clients that sent `"1"` for
/// punctuation only and `"newlines"` for punctuation and newlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSentences {
    /// Treat each text as one sentence.
    None,
    /// Split on punctuation only.
    Punctuation,
    /// Split on punctuation and newlines.
    PunctuationAndNewlines,
}

impl SplitSentences {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Punctuation => "nonewlines",
            Self::PunctuationAndNewlines => "1",
        }
    }
}

/// Desired formality of the translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Less,
    Default,
    More,
}

impl Formality {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Default => "default",
            Self::More => "more",
        }
    }
}

/// Optional settings for [`Client::translate`](super::Client::translate).
///
/// Every field left as `None` is omitted from the request, so the service
/// applies its own default.
///
/// ```
/// use deepl_api::{Formality, TranslationOptions};
///
/// let options = TranslationOptions::default()
///     .source_language("DE")
///     .formality(Formality::More);
/// assert_eq!(options.source_language.as_deref(), Some("DE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationOptions {
    /// Source language code; `None` lets the service detect it per text.
    pub source_language: Option<String>,
    pub split_sentences: Option<SplitSentences>,
    pub preserve_formatting: Option<bool>,
    pub formality: Option<Formality>,
}

impl TranslationOptions {
    #[must_use]
    pub fn source_language(mut self, code: impl Into<String>) -> Self {
        self.source_language = Some(code.into());
        self
    }

    #[must_use]
    pub const fn split_sentences(mut self, mode: SplitSentences) -> Self {
        self.split_sentences = Some(mode);
        self
    }

    #[must_use]
    pub const fn preserve_formatting(mut self, preserve: bool) -> Self {
        self.preserve_formatting = Some(preserve);
        self
    }

    #[must_use]
    pub const fn formality(mut self, formality: Formality) -> Self {
        self.formality = Some(formality);
        self
    }

    /// Form fields for the options that are set, in wire representation.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if let Some(code) = &self.source_language {
            fields.push(("source_lang", code.clone()));
        }
        if let Some(mode) = self.split_sentences {
            fields.push(("split_sentences", mode.as_str().to_string()));
        }
        if let Some(preserve) = self.preserve_formatting {
            fields.push(("preserve_formatting", u8::from(preserve).to_string()));
        }
        if let Some(formality) = self.formality {
            fields.push(("formality", formality.as_str().to_string()));
        }

        fields
    }
}
