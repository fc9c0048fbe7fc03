use serde::{Deserialize, Serialize};

/// Fill colors for pie slices, in assignment order.
/// When a chart has more slices than colors, the palette cycles.
pub const PALETTE: [&str; 4] = ["#42a5f5", "#66bb6a", "#ffa726", "#ef5350"];

/// One slice of the category-breakdown pie chart.
///
/// The core generates these — the frontend just renders them.
/// Slices appear in first-occurrence order of their category in the
/// filtered list; an empty list yields no slices and the frontend
/// omits the chart entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Category display name (e.g., "Food")
    pub label: String,

    /// Sum of amounts for this category in the filtered list
    pub value: f64,

    /// Fill color, a CSS hex string from [`PALETTE`]
    pub color: String,
}
