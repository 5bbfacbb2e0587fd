use tracing::debug;

use crate::errors::CoreError;
use crate::models::bucket::BucketState;
use crate::models::category::BucketCategory;
use crate::models::expense::Expense;
use crate::models::settings::DateFormat;

/// Column headers of the expense table.
pub const EXPENSE_HEADERS: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// Renders the budget summary and the expense list as CSV text.
///
/// Layout (every row has four columns):
/// - `Budget Summary,,,`
/// - `Salary,,<amount>,` then `<Bucket> Allocated|Spent|Remaining,,<amount>,` per bucket
/// - a blank `,,,` separator
/// - `Date,Description,Amount,Category`
/// - one row per expense, in the order given
///
/// Fields containing commas, quotes or newlines are quoted, so free-text
/// descriptions never shift columns.
pub struct ExportService {
    date_format: DateFormat,
}

impl ExportService {
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }

    pub fn export_csv(
        &self,
        expenses: &[Expense],
        salary: f64,
        state: &BucketState,
    ) -> Result<String, CoreError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(["Budget Summary", "", "", ""])?;
        Self::write_summary_row(&mut writer, "Salary", salary)?;
        for category in BucketCategory::ALL {
            let bucket = state.get(category);
            let label = category.label();
            Self::write_summary_row(&mut writer, &format!("{label} Allocated"), bucket.allocated)?;
            Self::write_summary_row(&mut writer, &format!("{label} Spent"), bucket.spent)?;
            Self::write_summary_row(&mut writer, &format!("{label} Remaining"), bucket.remaining)?;
        }
        writer.write_record(["", "", "", ""])?;

        writer.write_record(EXPENSE_HEADERS)?;
        for expense in expenses {
            writer.write_record([
                self.date_format.format(expense.date()),
                expense.description.clone(),
                expense.amount.to_string(),
                expense.category.as_str().to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Serialization(format!("Failed to flush CSV writer: {e}")))?;
        let csv = String::from_utf8(bytes)
            .map_err(|e| CoreError::Serialization(format!("CSV output is not valid UTF-8: {e}")))?;

        debug!(rows = expenses.len(), bytes = csv.len(), "rendered CSV export");
        Ok(csv)
    }

    fn write_summary_row(
        writer: &mut csv::Writer<Vec<u8>>,
        label: &str,
        value: f64,
    ) -> Result<(), CoreError> {
        // -0.0 would otherwise render as "-0.00"
        let value = if value == 0.0 { 0.0 } else { value };
        let amount = format!("{value:.2}");
        writer.write_record([label, "", amount.as_str(), ""])?;
        Ok(())
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new(DateFormat::default())
    }
}
