pub mod dates;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use models::{
    budget::Budget,
    bucket::BucketState,
    category::BucketCategory,
    chart::BucketChartEntry,
    expense::Expense,
    settings::Settings,
    summary::WeeklySummary,
};
use services::{
    allocation_service::AllocationService, chart_service::ChartService,
    export_service::ExportService, input_service::InputService,
    summary_service::SummaryService,
};
use storage::manager::StorageManager;
use tracing::{info, warn};

use errors::CoreError;

/// Main entry point for the Budget Tracker core library.
/// Owns the salary and the expense list, and derives everything else on request.
#[must_use]
pub struct BudgetTracker {
    budget: Budget,
    allocation_service: AllocationService,
    summary_service: SummaryService,
    export_service: ExportService,
    chart_service: ChartService,
    input_service: InputService,
}

impl std::fmt::Debug for BudgetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetTracker")
            .field("salary", &self.budget.salary)
            .field("expenses", &self.budget.expenses.len())
            .field("settings", &self.budget.settings)
            .finish()
    }
}

impl Default for BudgetTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetTracker {
    /// Start an empty session with the default 50/30/20 split.
    pub fn new() -> Self {
        Self::build(Budget::default())
    }

    /// Start an empty session with custom settings. Fails if the split is invalid.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(Budget {
            settings,
            ..Budget::default()
        }))
    }

    // ── Salary ──────────────────────────────────────────────────────

    /// Set the salary. Negative values are accepted and flow through to the buckets.
    pub fn set_salary(&mut self, salary: f64) {
        self.budget.salary = salary;
        if salary < 0.0 {
            warn!(salary, "negative salary set");
        } else {
            info!(salary, "salary set");
        }
    }

    /// Set the salary from raw text; unparsable input becomes 0.
    /// Returns the value that was stored.
    pub fn set_salary_from_input(&mut self, raw: &str) -> f64 {
        let salary = InputService::parse_amount(raw);
        self.set_salary(salary);
        salary
    }

    #[must_use]
    pub fn salary(&self) -> f64 {
        self.budget.salary
    }

    // ── Expenses ────────────────────────────────────────────────────

    /// Append an already-built expense. Returns its ID.
    /// Warns once per recorded expense that leaves its bucket overspent.
    pub fn add_expense(&mut self, expense: Expense) -> uuid::Uuid {
        let id = expense.id;
        let category = expense.category;
        info!(
            %id,
            amount = expense.amount,
            category = %category,
            "expense recorded"
        );
        self.budget.expenses.push(expense);

        let bucket = *self.bucket_state().get(category);
        if bucket.is_overspent() {
            warn!(
                category = %category,
                remaining = bucket.remaining,
                "bucket overspent"
            );
        }
        id
    }

    /// Record an expense from form input, stamped with the current local time.
    pub fn record_expense(
        &mut self,
        amount_text: &str,
        description: &str,
        category: BucketCategory,
    ) -> Result<uuid::Uuid, CoreError> {
        self.record_expense_at(amount_text, description, category, Local::now().naive_local())
    }

    /// Record an expense from form input at an explicit time.
    pub fn record_expense_at(
        &mut self,
        amount_text: &str,
        description: &str,
        category: BucketCategory,
        timestamp: NaiveDateTime,
    ) -> Result<uuid::Uuid, CoreError> {
        let expense = self
            .input_service
            .build_expense(amount_text, description, category, timestamp)?;
        Ok(self.add_expense(expense))
    }

    /// Get a single expense by its ID.
    pub fn get_expense(&self, id: uuid::Uuid) -> Result<&Expense, CoreError> {
        self.budget
            .expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::ExpenseNotFound(id.to_string()))
    }

    /// All expenses, oldest first (recording order).
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.budget.expenses
    }

    /// All expenses, newest first, as the history list shows them.
    #[must_use]
    pub fn expenses_newest_first(&self) -> Vec<&Expense> {
        self.budget.expenses.iter().rev().collect()
    }

    /// Expenses filed under one bucket, oldest first.
    #[must_use]
    pub fn expenses_in(&self, category: BucketCategory) -> Vec<&Expense> {
        self.budget
            .expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.budget.expenses.len()
    }

    /// Export and weekly summary are only offered once something has been logged.
    #[must_use]
    pub fn has_expenses(&self) -> bool {
        !self.budget.expenses.is_empty()
    }

    // ── Derived views ───────────────────────────────────────────────

    /// Allocated/spent/remaining per bucket, recomputed from the current state.
    pub fn bucket_state(&self) -> BucketState {
        self.allocation_service
            .allocate(self.budget.salary, &self.budget.expenses)
    }

    /// Expenses grouped by Sunday-starting week.
    pub fn weekly_summary(&self) -> WeeklySummary {
        self.summary_service.weekly_summary(&self.budget.expenses)
    }

    /// Chart-ready bucket breakdown with progress percentages.
    pub fn bucket_breakdown(&self) -> Vec<BucketChartEntry> {
        let state = self.bucket_state();
        self.chart_service
            .bucket_breakdown(&state, &self.budget.settings.split)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Render the summary block and the expense table as CSV.
    pub fn export_csv(&self) -> Result<String, CoreError> {
        let state = self.bucket_state();
        self.export_service
            .export_csv(&self.budget.expenses, self.budget.salary, &state)
    }

    /// File name for an export made on `date`.
    #[must_use]
    pub fn export_filename(&self, date: NaiveDate) -> String {
        StorageManager::export_filename(date)
    }

    /// Export to `budget-tracker-<today>.csv` inside `dir` (native only, not WASM).
    /// "Today" is the UTC date, so the name matches an ISO timestamp's date part.
    /// Refuses when no expenses have been recorded.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_export_to_dir(
        &self,
        dir: impl AsRef<std::path::Path>,
    ) -> Result<std::path::PathBuf, CoreError> {
        if !self.has_expenses() {
            return Err(CoreError::ValidationError(
                "Nothing to export: no expenses recorded".into(),
            ));
        }
        let csv = self.export_csv()?;
        StorageManager::write_export(dir.as_ref(), Utc::now().date_naive(), &csv)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.budget.settings
    }

    /// Export the whole session state as JSON (for debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.budget)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize budget: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(budget: Budget) -> Self {
        let allocation_service = AllocationService::new(budget.settings.split);
        let export_service = ExportService::new(budget.settings.date_format);

        Self {
            budget,
            allocation_service,
            summary_service: SummaryService::new(),
            export_service,
            chart_service: ChartService::new(),
            input_service: InputService::new(),
        }
    }
}
