use anyhow::{Result, bail};

use super::connect;
use crate::api::{Formality, Translation, TranslationOptions};
use crate::cli::TranslateArgs;
use crate::config::ResolvedConfig;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::ui::Spinner;

/// Translates the input file (or stdin) and writes the result to the output
/// file (or stdout).
pub async fn run_translate(args: TranslateArgs) -> Result<()> {
    let (client, config) = connect()?;

    let source_text = InputReader::read(args.input_file.as_deref())?;
    if source_text.is_empty() {
        bail!("Input is empty");
    }

    let options = build_options(&args, &config);

    let spinner = Spinner::new("Translating...");
    let result = client
        .translate(&args.target_language, &[source_text], &options)
        .await;
    spinner.stop();

    let translated = join_translations(&result?);

    match args.output_file.as_deref() {
        Some(path) => {
            atomic_write(path, &translated)?;
            crate::status!("Translation written to {path}");
        }
        None => println!("{translated}"),
    }

    Ok(())
}

/// Merges the command-line flags with the config file defaults.
///
/// Flags win. Anything neither sets stays unset and is left to the service.
pub fn build_options(args: &TranslateArgs, config: &ResolvedConfig) -> TranslationOptions {
    let formality = if args.formality_more {
        Some(Formality::More)
    } else if args.formality_less {
        Some(Formality::Less)
    } else {
        config.formality
    };

    let preserve_formatting = if args.preserve_formatting {
        Some(true)
    } else {
        config.preserve_formatting
    };

    TranslationOptions {
        source_language: args.source_language.clone(),
        split_sentences: args.split_sentences.map(Into::into),
        preserve_formatting,
        formality,
    }
}

pub fn join_translations(translations: &[Translation]) -> String {
    translations
        .iter()
        .map(|entry| entry.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
