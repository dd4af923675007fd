use anyhow::Result;

use super::connect;
use crate::api::UsageInformation;
use crate::ui::Style;

/// Prints character usage and limits for the account.
pub async fn run_usage_information() -> Result<()> {
    let (client, _) = connect()?;
    let usage = client.get_usage().await?;

    print!("{}", format_usage(&usage));
    Ok(())
}

pub fn format_usage(usage: &UsageInformation) -> String {
    format!(
        "Available characters per billing period: {}\n\
         Characters already translated in the current billing period: {}\n",
        Style::value(usage.character_limit),
        Style::value(usage.character_count)
    )
}
