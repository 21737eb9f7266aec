//! Load loan options from CSV
//!
//! Expected columns: Name,Principal,Rate,Tenure

use csv::Reader;
use std::path::Path;

use super::LoanComparison;
use crate::error::Result;
use crate::loan::LoanTerms;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Tenure")]
    tenure: f64,
}

impl CsvRow {
    fn into_entry(self) -> (String, LoanTerms) {
        (self.name, LoanTerms::new(self.principal, self.rate, self.tenure))
    }
}

/// Load loan options from a CSV file
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<LoanComparison> {
    let reader = Reader::from_path(path)?;
    collect_options(reader)
}

/// Load loan options from any reader (e.g., string buffer, stdin)
pub fn load_options_from_reader<R: std::io::Read>(reader: R) -> Result<LoanComparison> {
    collect_options(Reader::from_reader(reader))
}

fn collect_options<R: std::io::Read>(mut reader: Reader<R>) -> Result<LoanComparison> {
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.into_entry());
    }
    Ok(LoanComparison::from_terms(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoanError;

    #[test]
    fn test_load_options_from_reader() {
        let data = "Name,Principal,Rate,Tenure\n\
                    Bank A,500000,10.5,20\n\
                    Bank B,500000,9.75,20\n";
        let comparison = load_options_from_reader(data.as_bytes()).unwrap();

        assert_eq!(comparison.len(), 2);
        assert_eq!(comparison.options()[0].name, "Bank A");
        assert_eq!(comparison.options()[1].terms, LoanTerms::new(500_000.0, 9.75, 20.0));
        assert_eq!(comparison.best_option().unwrap().name, "Bank B");
    }

    #[test]
    fn test_bad_number_is_csv_error() {
        let data = "Name,Principal,Rate,Tenure\nBank A,lots,10,20\n";
        let err = load_options_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoanError::Csv(_)));
    }
}
