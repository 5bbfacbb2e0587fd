use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::CoreError;
use crate::models::category::BucketCategory;
use crate::models::expense::Expense;

/// Leading numeric prefix: optional sign, digits with optional fraction, optional exponent.
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid numeric regex")
});

/// Turns raw text from input fields (typed or transcribed) into amounts and expenses.
pub struct InputService;

impl InputService {
    pub fn new() -> Self {
        Self
    }

    /// Coerce free text into an amount.
    ///
    /// Reads the longest numeric prefix after leading whitespace, so `"12.5 dollars"`
    /// yields 12.5. Empty, non-numeric or non-finite input yields 0 rather than an error,
    /// and `"-0"` yields an unsigned 0.
    #[must_use]
    pub fn parse_amount(raw: &str) -> f64 {
        NUMERIC_PREFIX
            .find(raw.trim_start())
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map(|v| if v == 0.0 { 0.0 } else { v })
            .unwrap_or(0.0)
    }

    /// Build an expense from form input.
    ///
    /// Both the amount text and the description must be non-blank. The amount is
    /// coerced with [`InputService::parse_amount`] and must not be negative.
    pub fn build_expense(
        &self,
        amount_text: &str,
        description: &str,
        category: BucketCategory,
        timestamp: NaiveDateTime,
    ) -> Result<Expense, CoreError> {
        if amount_text.trim().is_empty() {
            return Err(CoreError::ValidationError("Amount is required".into()));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError("Description is required".into()));
        }

        let amount = Self::parse_amount(amount_text);
        if amount < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Amount must not be negative, got {amount}"
            )));
        }

        Ok(Expense::at(amount, description, category, timestamp))
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}
