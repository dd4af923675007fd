use clap::{Parser, Subcommand, ValueEnum};

use crate::api::SplitSentences;

#[derive(Parser, Debug)]
#[command(name = "deepl")]
#[command(about = "Command-line client for the DeepL translation API")]
#[command(
    long_about = "Command-line client for the DeepL translation API.\n\n\
                  The API key is read from the DEEPL_API_KEY environment variable \
                  or from ~/.config/deepl/config.toml."
)]
#[command(version)]
pub struct Args {
    /// Suppress status output on stderr
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show character usage and limits for the current billing period
    UsageInformation,
    /// List the available source and target languages
    Languages,
    /// Translate text from a file or stdin
    Translate(TranslateArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct TranslateArgs {
    /// Source language code (detected automatically if omitted)
    #[arg(short = 's', long)]
    pub source_language: Option<String>,

    /// Target language code, e.g. DE or EN-US
    #[arg(short = 't', long)]
    pub target_language: String,

    /// File to translate (reads from stdin if not provided)
    #[arg(short = 'i', long)]
    pub input_file: Option<String>,

    /// File to write the translation to (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output_file: Option<String>,

    /// Preserve the formatting of the input text
    #[arg(short = 'p', long)]
    pub preserve_formatting: bool,

    /// Translate more formally
    #[arg(short = 'm', long, conflicts_with = "formality_less")]
    pub formality_more: bool,

    /// Translate less formally
    #[arg(short = 'l', long)]
    pub formality_less: bool,

    /// How to split the input into sentences
    #[arg(long, value_enum)]
    pub split_sentences: Option<SplitMode>,
}

/// Command-line names for [`SplitSentences`].
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Do not split
    None,
    /// Split on punctuation only
    Punctuation,
    /// Split on punctuation and newlines
    All,
}

impl From<SplitMode> for SplitSentences {
    fn from(mode: SplitMode) -> Self {
        match mode {
            SplitMode::None => Self::None,
            SplitMode::Punctuation => Self::Punctuation,
            SplitMode::All => Self::PunctuationAndNewlines,
        }
    }
}
