// ============================================================================
// ISO 4217 Catalog
// Lazily-built immutable lookup table of ISO currency records
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use super::{Currencies, Currency};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded ISO 4217 table, one record per currency in active circulation.
const ISO_4217_JSON: &str = include_str!("../../resources/iso_4217.json");

/// Key names accepted by [`IsoCurrencies::record_by`].
const SUPPORTED_LOOKUP_KEYS: [&str; 2] = ["alphabeticCode", "numericCode"];

/// One ISO 4217 currency record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// Three-letter alphabetic code, the record key.
    pub alphabetic_code: String,
    /// English currency name.
    #[serde(rename = "currency")]
    pub name: String,
    /// Number of fractional digits of the currency's smallest denomination.
    pub minor_unit: u32,
    /// Three-digit numeric code.
    pub numeric_code: u16,
}

/// The published table: one immutable index per supported lookup key, built
/// together at load time and never re-keyed afterwards.
struct CurrencyTable {
    by_alphabetic_code: HashMap<String, CurrencyRecord>,
    by_numeric_code: HashMap<u16, String>,
}

static TABLE: OnceLock<Result<CurrencyTable, CurrencyError>> = OnceLock::new();

fn load_table() -> Result<CurrencyTable, CurrencyError> {
    let by_alphabetic_code: HashMap<String, CurrencyRecord> = serde_json::from_str(ISO_4217_JSON)
        .map_err(|e| CurrencyError::CatalogLoadFailure(e.to_string()))?;

    let by_numeric_code = by_alphabetic_code
        .values()
        .map(|record| (record.numeric_code, record.alphabetic_code.clone()))
        .collect();

    tracing::debug!(
        "loaded {} ISO 4217 currency records",
        by_alphabetic_code.len()
    );

    Ok(CurrencyTable {
        by_alphabetic_code,
        by_numeric_code,
    })
}

fn table() -> CurrencyResult<&'static CurrencyTable> {
    match TABLE.get_or_init(load_table) {
        Ok(table) => Ok(table),
        Err(error) => Err(error.clone()),
    }
}

/// ISO 4217 currency set backed by the embedded table.
///
/// The table is parsed once, on first query, and published as immutable
/// per-key indexes; concurrent readers never observe mutation. A load
/// failure is cached and surfaced as `CatalogLoadFailure` on every
/// subsequent query, never retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsoCurrencies;

impl IsoCurrencies {
    pub fn new() -> Self {
        Self
    }

    fn resolve<'a>(table: &'a CurrencyTable, currency: &Currency) -> Option<&'a CurrencyRecord> {
        match currency {
            Currency::Code(code) => table.by_alphabetic_code.get(code),
            Currency::NumericCode(numeric_code) => table
                .by_numeric_code
                .get(numeric_code)
                .and_then(|code| table.by_alphabetic_code.get(code)),
        }
    }

    /// Look up the full record for a currency, resolved through the index
    /// matching the identity's own identifier form.
    ///
    /// # Errors
    /// `CatalogLoadFailure` if the table cannot be parsed.
    pub fn record(&self, currency: &Currency) -> CurrencyResult<Option<&'static CurrencyRecord>> {
        Ok(Self::resolve(table()?, currency))
    }

    /// Look up the record through a named key, `"alphabeticCode"` or
    /// `"numericCode"`. The key selects which identifier of the passed
    /// identity drives the search; an identity that does not carry that
    /// identifier resolves to `None`.
    ///
    /// # Errors
    /// `UnknownLookupKey` for any other key name; `CatalogLoadFailure` if
    /// the table cannot be parsed.
    pub fn record_by(
        &self,
        currency: &Currency,
        search_key: &str,
    ) -> CurrencyResult<Option<&'static CurrencyRecord>> {
        let table = table()?;
        match search_key {
            "alphabeticCode" => Ok(currency
                .alphabetic_code()
                .and_then(|code| table.by_alphabetic_code.get(code))),
            "numericCode" => Ok(currency.numeric_code().and_then(|numeric_code| {
                table
                    .by_numeric_code
                    .get(&numeric_code)
                    .and_then(|code| table.by_alphabetic_code.get(code))
            })),
            other => Err(CurrencyError::UnknownLookupKey(format!(
                "{} (supported keys: {})",
                other,
                SUPPORTED_LOOKUP_KEYS.join(", ")
            ))),
        }
    }
}

impl Currencies for IsoCurrencies {
    fn contains(&self, currency: &Currency) -> CurrencyResult<bool> {
        Ok(Self::resolve(table()?, currency).is_some())
    }

    fn minor_unit_digits(&self, currency: &Currency) -> CurrencyResult<u32> {
        Self::resolve(table()?, currency)
            .map(|record| record.minor_unit)
            .ok_or_else(|| CurrencyError::UnknownCurrency(currency.to_string()))
    }

    fn iter(&self) -> CurrencyResult<Box<dyn Iterator<Item = Currency> + '_>> {
        let table = table()?;
        Ok(Box::new(
            table
                .by_alphabetic_code
                .keys()
                .map(|code| Currency::Code(code.clone())),
        ))
    }
}
