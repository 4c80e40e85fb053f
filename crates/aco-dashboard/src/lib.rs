//! Filter-and-aggregate pipeline of the ACO dashboard.
//!
//! ```text
//! CaseTable + FilterSelection
//!     -> apply_filter        (FilteredView, file order)
//!     -> aggregates          (party, outcome, win rate, time series, rapporteur, grid)
//!     -> insights            (top litigant, peak year)
//!     = DashboardView
//! ```
//!
//! [`render`] runs the whole pass. A [`Session`] keeps one user's selection
//! over a shared table and re-renders on every change.

pub mod aggregate;
pub mod filter;
pub mod insight;
pub mod render;
pub mod session;

pub use aggregate::{
    count_by_party, count_by_rapporteur, outcome_share, party_outcome_shares,
    rapporteur_year_matrix, time_series_by_outcome, win_rate_by_party,
};
pub use filter::{FilteredView, apply_filter};
pub use insight::{peak_year, top_litigant};
pub use render::{DashboardView, render};
pub use session::Session;
