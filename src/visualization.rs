//! # Visualization
//!
//! $$
//! \text{series} \mapsto \text{price and cumulative-return charts}
//! $$
//!
use chrono::NaiveDate;
use ndarray::Array1;
use ndarray::Array2;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;
use plotly::common::Mode;
use plotly::layout::Axis;

fn date_labels(dates: &[NaiveDate]) -> Vec<String> {
  dates.iter().map(|d| d.to_string()).collect()
}

/// Adjusted close chart, one line per symbol.
pub fn price_chart(dates: &[NaiveDate], symbols: &[String], closes: &Array2<f64>) -> Plot {
  let x = date_labels(dates);

  let mut plot = Plot::new();
  for (idx, symbol) in symbols.iter().enumerate() {
    let trace = Scatter::new(x.clone(), closes.column(idx).to_vec())
      .mode(Mode::Lines)
      .name(symbol.as_str());
    plot.add_trace(trace);
  }
  plot.set_layout(
    Layout::new()
      .title("Prices")
      .x_axis(Axis::new().title("Date"))
      .y_axis(Axis::new().title("Price")),
  );

  plot
}

/// Cumulative portfolio return in percent over the return dates.
pub fn cumulative_return_chart(dates: &[NaiveDate], cumulative_pct: &Array1<f64>) -> Plot {
  let mut plot = Plot::new();
  let trace = Scatter::new(date_labels(dates), cumulative_pct.to_vec())
    .mode(Mode::Lines)
    .name("Portfolio");
  plot.add_trace(trace);
  plot.set_layout(
    Layout::new()
      .title("Cumulative Portfolio Return")
      .x_axis(Axis::new().title("Date"))
      .y_axis(Axis::new().title("Return (%)")),
  );

  plot
}
