//! # Portfolio
//!
//! $$
//! \sigma_p^2 = \mathbf{w}^\top \Sigma \mathbf{w}
//! $$
//!
//! Weight aggregation, normalization and return/risk statistics.

pub mod aggregate;
pub mod data;
pub mod stats;
pub mod weights;

pub use aggregate::PortfolioAggregator;
pub use data::returns_from_prices;
pub use data::simple_returns_series;
pub use stats::PortfolioStatistics;
pub use stats::TRADING_DAYS_PER_YEAR;
pub use stats::compute_statistics;
pub use weights::normalize;
