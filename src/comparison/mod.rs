//! Side-by-side comparison of loan offers
//!
//! Each option is summarized with the EMI calculator and ranked by total payment.

pub mod loader;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::calculator::LoanSummary;
use crate::loan::LoanTerms;

pub use loader::{load_options, load_options_from_reader};

/// A named loan offer and its derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOption {
    /// Identifier assigned when the option is added
    pub id: u32,

    /// Lender or product name
    pub name: String,

    pub terms: LoanTerms,

    pub summary: LoanSummary,
}

/// Collection of loan options, in the order they were entered
#[derive(Debug, Clone, Default)]
pub struct LoanComparison {
    options: Vec<LoanOption>,
    next_id: u32,
}

impl LoanComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a comparison from named terms, summarizing them in parallel
    pub fn from_terms<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, LoanTerms)>,
    {
        let entries: Vec<(String, LoanTerms)> = entries
            .into_iter()
            .map(|(name, terms)| (name.trim().to_string(), terms))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        // Order is preserved by the indexed parallel collect
        let options: Vec<LoanOption> = entries
            .into_par_iter()
            .enumerate()
            .map(|(index, (name, terms))| LoanOption {
                id: index as u32 + 1,
                name,
                summary: LoanSummary::from_terms(&terms),
                terms,
            })
            .collect();

        let next_id = options.len() as u32;
        log::debug!("summarized {} loan options", options.len());

        Self { options, next_id }
    }

    /// Add an option. A blank name is rejected and nothing is added.
    pub fn add(&mut self, name: &str, terms: LoanTerms) -> Option<u32> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.next_id += 1;
        let id = self.next_id;
        self.options.push(LoanOption {
            id,
            name: name.to_string(),
            terms,
            summary: LoanSummary::from_terms(&terms),
        });
        Some(id)
    }

    /// Remove an option by id, returning it if present
    pub fn remove(&mut self, id: u32) -> Option<LoanOption> {
        let index = self.options.iter().position(|o| o.id == id)?;
        Some(self.options.remove(index))
    }

    pub fn options(&self) -> &[LoanOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option with the lowest total payment. Ties go to the earlier option.
    pub fn best_option(&self) -> Option<&LoanOption> {
        self.options.iter().reduce(|best, current| {
            if current.summary.total_payment < best.summary.total_payment {
                current
            } else {
                best
            }
        })
    }

    /// All options ordered by ascending total payment, stable on ties
    pub fn ranked(&self) -> Vec<&LoanOption> {
        let mut ranked: Vec<&LoanOption> = self.options.iter().collect();
        ranked.sort_by(|a, b| {
            a.summary
                .total_payment
                .partial_cmp(&b.summary.total_payment)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }
}
