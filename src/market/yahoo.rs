//! # Yahoo Finance Provider
//!
//! $$
//! \text{ticker} \mapsto \{p_t^{\text{adj}}\}_t
//! $$
//!
//! Blocking Yahoo Finance client behind the [`MarketData`] seam.

use std::collections::BTreeMap;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use chrono::Datelike;
use chrono::NaiveDate;
use ndarray::Array2;
use time::Date;
use time::Month;
use time::OffsetDateTime;
use tracing::debug;
use yahoo_finance_api::YahooConnector;

use super::MarketData;
use super::PriceTable;
use super::SymbolValidator;

pub struct YahooProvider {
  connector: YahooConnector,
}

impl YahooProvider {
  pub fn new() -> Result<Self> {
    Ok(Self {
      connector: YahooConnector::new()?,
    })
  }

  fn adjusted_closes(
    &self,
    symbol: &str,
    from: OffsetDateTime,
  ) -> Result<BTreeMap<NaiveDate, f64>> {
    let response = self
      .connector
      .get_quote_history(symbol, from, OffsetDateTime::now_utc())
      .with_context(|| format!("fetching price history for {symbol}"))?;

    let mut closes = BTreeMap::new();
    for quote in response.quotes()? {
      let day = OffsetDateTime::from_unix_timestamp(quote.timestamp as i64)?.date();
      if let Some(date) = naive_date(day) {
        closes.insert(date, quote.adjclose);
      }
    }
    Ok(closes)
  }
}

impl SymbolValidator for YahooProvider {
  /// A symbol is known when a max-range quote request yields any quotes.
  fn has_history(&self, symbol: &str) -> Result<bool> {
    let response = match self.connector.get_quote_range(symbol, "1d", "max") {
      Ok(response) => response,
      Err(_) => return Ok(false),
    };
    Ok(response.quotes().map(|q| !q.is_empty()).unwrap_or(false))
  }
}

impl MarketData for YahooProvider {
  fn fetch_price_table(&self, symbols: &[String], from: NaiveDate) -> Result<PriceTable> {
    if symbols.is_empty() {
      bail!("no symbols to fetch");
    }

    let start = start_of_day(from)?;
    let mut per_symbol = Vec::with_capacity(symbols.len());
    for symbol in symbols {
      let closes = self.adjusted_closes(symbol, start)?;
      debug!(symbol = %symbol, observations = closes.len(), "fetched history");
      if closes.is_empty() {
        bail!("no price history for {symbol} from {from}");
      }
      per_symbol.push(closes);
    }

    // Keep only dates quoted for every symbol, ascending.
    let mut dates: Vec<NaiveDate> = per_symbol[0].keys().copied().collect();
    dates.retain(|d| per_symbol.iter().all(|closes| closes.contains_key(d)));

    let mut closes = Array2::<f64>::zeros((dates.len(), symbols.len()));
    for (row, date) in dates.iter().enumerate() {
      for (col, series) in per_symbol.iter().enumerate() {
        closes[[row, col]] = series[date];
      }
    }

    Ok(PriceTable::new(dates, symbols.to_vec(), closes))
  }
}

fn naive_date(day: Date) -> Option<NaiveDate> {
  NaiveDate::from_ymd_opt(day.year(), u8::from(day.month()) as u32, day.day() as u32)
}

fn start_of_day(date: NaiveDate) -> Result<OffsetDateTime> {
  let month = Month::try_from(date.month() as u8)?;
  let day = Date::from_calendar_date(date.year(), month, date.day() as u8)?;
  Ok(day.midnight().assume_utc())
}
