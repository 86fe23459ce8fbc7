//! view model for the side-by-side comparison of the three variants: a
//! category table grouped by cost type with per-row highlight flags, and one
//! composition series per variant for chart rendering.
mod comparison_row;
mod comparison_table;
mod composition_series;
mod cost_group;
mod row_highlight;

pub use comparison_row::{ComparisonRow, TotalRow, VariantValues};
pub use comparison_table::{Comparison, ComparisonGroup};
pub use composition_series::{CompositionSeries, ZeroPolicy, CHART_PALETTE};
pub use cost_group::CostGroup;
pub use row_highlight::{HighlightColor, RowHighlight};
