use std::collections::BTreeMap;
use std::io::Read;

use ngtax_core::{BracketTable, BracketTableError, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading band tables.
#[derive(Debug, Error)]
pub enum BracketTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid band table '{regime}': {source}")]
    InvalidTable {
        regime: String,
        #[source]
        source: BracketTableError,
    },
}

impl From<csv::Error> for BracketTableLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a band table CSV file.
///
/// - `regime`: Name of the table the band belongs to (e.g. `reform`)
/// - `min_income`: Lower bound of the band
/// - `max_income`: Upper bound of the band (empty for the unbounded top band)
/// - `rate`: Rate as a fraction (e.g. `0.15` for 15%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub regime: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

pub(crate) fn deserialize_optional_decimal<'de, D>(
    deserializer: D
) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .replace(',', "")
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for progressive band tables from CSV files.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse band records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        debug!(records = records.len(), "parsed band records");
        Ok(records)
    }

    /// Group records by regime and validate each group as a [`BracketTable`].
    ///
    /// Bands keep their file order within a regime; the file must list them
    /// lowest first.
    pub fn tables(
        records: &[BracketRecord]
    ) -> Result<BTreeMap<String, BracketTable>, BracketTableLoaderError> {
        let mut groups: BTreeMap<String, Vec<TaxBracket>> = BTreeMap::new();

        for record in records {
            groups
                .entry(record.regime.trim().to_string())
                .or_default()
                .push(TaxBracket::new(
                    record.min_income,
                    record.max_income,
                    record.rate,
                ));
        }

        groups
            .into_iter()
            .map(|(regime, brackets)| match BracketTable::new(brackets) {
                Ok(table) => Ok((regime, table)),
                Err(source) => {
                    warn!(regime = %regime, error = %source, "rejecting band table");
                    Err(BracketTableLoaderError::InvalidTable { regime, source })
                }
            })
            .collect()
    }

    /// Parse and validate in one step.
    pub fn load<R: Read>(
        reader: R
    ) -> Result<BTreeMap<String, BracketTable>, BracketTableLoaderError> {
        let records = Self::parse(reader)?;
        Self::tables(&records)
    }
}
