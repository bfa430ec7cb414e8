//! # Weight Normalization
//!
//! $$
//! w_i' = \frac{w_i}{\sum_j w_j}
//! $$

use anyhow::Result;
use anyhow::bail;

/// Rescale weights to sum to one, preserving relative proportions.
///
/// Bails when the input is empty or its sum is not strictly positive;
/// dividing through zero would silently hand NaN/Inf weights downstream.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>> {
  let total: f64 = weights.iter().sum();
  if total <= 0.0 || !total.is_finite() {
    bail!("cannot normalize portfolio weights summing to {total}");
  }

  Ok(weights.iter().map(|w| w / total).collect())
}
