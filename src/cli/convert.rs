use super::ui;
use crate::core::{
    Catalog, ConversionError, ConversionRequest, ConversionResult, Converter, RateProvider,
};
use anyhow::Result;

/// Validates the user input, performs one conversion and prints the result.
///
/// Input errors are reported before any request is sent.
pub async fn run<P: RateProvider>(
    converter: &Converter<P>,
    catalog: &Catalog,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<ConversionResult> {
    let request = ConversionRequest::parse(from, to, amount, catalog).map_err(into_report)?;

    let spinner = ui::new_spinner(&format!(
        "Fetching {} exchange rates...",
        request.source
    ));
    let result = converter.convert_request(&request).await;
    spinner.finish_and_clear();
    let result = result.map_err(into_report)?;

    println!(
        "{}",
        ui::style_text(&format_result(&result), ui::StyleType::Result)
    );
    println!(
        "{}",
        ui::style_text(&format_rate(&result), ui::StyleType::Subtle)
    );
    Ok(result)
}

/// Formats a conversion as shown to the user, e.g. `100.00 USD = 85.00 EUR`.
pub fn format_result(result: &ConversionResult) -> String {
    format!(
        "{:.2} {} = {:.2} {}",
        result.amount, result.source, result.converted_amount, result.target
    )
}

fn format_rate(result: &ConversionResult) -> String {
    format!(
        "1 {} = {} {} (rates as of {})",
        result.source,
        result.rate,
        result.target,
        result.rates_as_of.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Maps each error kind to the message shown to the user.
pub fn user_message(err: &ConversionError) -> String {
    match err {
        ConversionError::Transport { .. } => {
            "Could not reach the exchange rate service".to_string()
        }
        ConversionError::MalformedResponse { .. } => {
            "The exchange rate service returned an unexpected response".to_string()
        }
        ConversionError::RateNotFound { target, .. } => {
            format!("No exchange rate available for {target}")
        }
        ConversionError::InvalidAmount(_) => "The amount must be a number".to_string(),
        ConversionError::SameCurrency(_) => {
            "Source and target currencies must be different".to_string()
        }
        ConversionError::UnknownCurrency(code) => format!(
            "Unknown currency '{code}'. Run `fxconv currencies` to list supported currencies"
        ),
    }
}

fn into_report(err: ConversionError) -> anyhow::Error {
    let message = user_message(&err);
    anyhow::Error::new(err).context(message)
}
