//! # deepl-api - DeepL API client and CLI
//!
//! A lightweight wrapper for the [DeepL](https://www.deepl.com/docs-api/)
//! REST API, plus the `deepl` command-line tool built on it.
//!
//! ## Library
//!
//! ```no_run
//! use deepl_api::{Client, ErrorKind, TranslationOptions};
//!
//! # async fn run() -> Result<(), deepl_api::Error> {
//! let client = Client::new("your-api-key:fx");
//!
//! let translations = client
//!     .translate("EN-US", &["ja"], &TranslationOptions::default().source_language("DE"))
//!     .await?;
//! assert_eq!(translations[0].text, "yes");
//!
//! let usage = client.get_usage().await?;
//! println!("{} of {}", usage.character_count, usage.character_limit);
//!
//! match client.target_languages().await {
//!     Ok(languages) => println!("{languages:?}"),
//!     Err(err) if err.kind() == ErrorKind::Authorization => eprintln!("check your key"),
//!     Err(err) => return Err(err),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Command line
//!
//! ```bash
//! export DEEPL_API_KEY=your-api-key:fx
//!
//! deepl usage-information
//! deepl languages
//! echo "Please go home." | deepl translate -s EN -t DE
//! deepl translate -t DE -m -i notes.txt -o notes.de.txt
//! ```

/// DeepL REST API client.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use api::{
    Client, Error, ErrorKind, Formality, LanguageCatalog, LanguageDirection, SplitSentences,
    Translation, TranslationOptions, TranslationResult, UsageInformation,
};
