//! Calculator input document
//!
//! A JSON document describing one loan scenario. Every field is optional and
//! falls back to the calculator's default form values.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::calculator::ScheduleConfig;
use crate::error::Result;
use crate::loan::LoanTerms;

fn default_principal() -> f64 {
    500_000.0
}

fn default_annual_rate() -> f64 {
    10.0
}

fn default_tenure_years() -> f64 {
    20.0
}

fn default_prepayment_amount() -> f64 {
    100_000.0
}

fn default_prepayment_month() -> u32 {
    12
}

fn default_stride() -> u32 {
    1
}

/// Input configuration for a calculator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed (default: 500000)
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual interest rate in percent (default: 10)
    #[serde(default = "default_annual_rate")]
    pub annual_rate_percent: f64,

    /// Tenure in years (default: 20)
    #[serde(default = "default_tenure_years")]
    pub tenure_years: f64,

    /// Lump sum for the prepayment scenario (default: 100000)
    #[serde(default = "default_prepayment_amount")]
    pub prepayment_amount: f64,

    /// Month the lump sum is paid (default: 12)
    #[serde(default = "default_prepayment_month")]
    pub prepayment_month: u32,

    /// Schedule sampling stride (default: 1)
    #[serde(default = "default_stride")]
    pub stride: u32,

    /// Schedule month cap (default: none)
    #[serde(default)]
    pub max_periods: Option<u32>,
}

impl LoanRequest {
    /// Read a request from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a request from any JSON source
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn terms(&self) -> LoanTerms {
        LoanTerms::new(self.principal, self.annual_rate_percent, self.tenure_years)
    }

    pub fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig {
            stride: self.stride,
            max_periods: self.max_periods,
        }
    }
}

impl Default for LoanRequest {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            annual_rate_percent: default_annual_rate(),
            tenure_years: default_tenure_years(),
            prepayment_amount: default_prepayment_amount(),
            prepayment_month: default_prepayment_month(),
            stride: default_stride(),
            max_periods: None,
        }
    }
}
