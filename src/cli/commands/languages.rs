use anyhow::Result;
use std::fmt::Write;

use super::connect;
use crate::api::LanguageCatalog;
use crate::ui::Style;

/// Prints the source and target languages the service supports.
pub async fn run_languages() -> Result<()> {
    let (client, _) = connect()?;
    let source = client.source_languages().await?;
    let target = client.target_languages().await?;

    print!(
        "{}",
        format_catalog("DeepL can translate from the following source languages:", &source)
    );
    println!();
    print!(
        "{}",
        format_catalog("DeepL can translate to the following target languages:", &target)
    );
    Ok(())
}

/// Renders one `  CODE  (Name)` line per language under `header`.
pub fn format_catalog(header: &str, catalog: &LanguageCatalog) -> String {
    let mut out = format!("{}\n", Style::header(header));
    for (code, name) in catalog {
        let _ = writeln!(
            out,
            "  {} ({})",
            Style::code(format!("{code:<5}")),
            Style::secondary(name)
        );
    }
    out
}
