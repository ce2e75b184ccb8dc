//! Visualization service
//!
//! Turns lifetime spending per category into chart slices and hands them to
//! a renderer.

use crate::error::{TrackerError, TrackerResult};
use crate::reports::SpendingReport;
use crate::storage::Storage;
use crate::tui::{ChartRenderer, ChartSlice};

pub const CHART_TITLE: &str = "Spending by Category";

/// Service for drawing the spending chart
pub struct VisualizationService<'a> {
    storage: &'a Storage,
}

impl<'a> VisualizationService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Build the slices for the spending chart
    ///
    /// Fails with `NoData` when there are no expenses, and with a validation
    /// error when a category total is negative or nothing was spent overall,
    /// since shares of such totals aren't meaningful.
    pub fn spending_slices(&self) -> TrackerResult<Vec<ChartSlice>> {
        let report = SpendingReport::generate(self.storage)?;

        if let Some(negative) = report.categories.iter().find(|c| c.total.is_negative()) {
            return Err(TrackerError::Validation(format!(
                "Cannot chart negative spending in {}",
                negative.category
            )));
        }
        if !report.total.is_positive() {
            return Err(TrackerError::Validation(
                "Cannot chart spending that totals zero".into(),
            ));
        }

        Ok(report
            .categories
            .into_iter()
            .map(|c| ChartSlice {
                value: c.total.as_f64(),
                percentage: c.percentage,
                label: c.category,
            })
            .collect())
    }

    /// Render the spending-by-category chart
    pub fn render_spending_by_category(&self, renderer: &mut dyn ChartRenderer) -> TrackerResult<()> {
        let slices = self.spending_slices()?;
        renderer.render(CHART_TITLE, &slices)
    }
}
