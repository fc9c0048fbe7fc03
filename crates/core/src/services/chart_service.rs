use crate::models::chart::{PieSlice, PALETTE};
use crate::models::expense::ExpenseRecord;
use crate::services::report_service::ReportService;

/// Generates chart-ready data sets from the expense list.
///
/// The core computes all the numbers — the frontend only renders.
pub struct ChartService {
    report_service: ReportService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            report_service: ReportService::new(),
        }
    }

    /// Build the category-breakdown pie for a filtered list.
    ///
    /// One slice per category present, in first-occurrence order, with
    /// the slice value being that category's total. Colors come from
    /// the fixed palette and cycle when slices outnumber it. An empty
    /// list yields no slices — the frontend omits the chart.
    pub fn build_pie(&self, expenses: &[&ExpenseRecord]) -> Vec<PieSlice> {
        self.report_service
            .category_totals(expenses)
            .into_iter()
            .enumerate()
            .map(|(i, (category, value))| PieSlice {
                label: category.to_string(),
                value,
                color: PALETTE[i % PALETTE.len()].to_string(),
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
