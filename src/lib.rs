//! # portfolio-rs
//!
//! $$
//! \text{lines} \to (\text{symbols}, \mathbf{w}) \to
//! \sigma_p = \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! $$
//!
//! Interactive portfolio construction from free-form console input, plus
//! return and risk statistics over historical daily price series.

pub mod market;
pub mod parse;
pub mod portfolio;
pub mod report;
pub mod session;
pub mod visualization;
