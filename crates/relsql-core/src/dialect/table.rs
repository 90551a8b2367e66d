//! Operator tables loaded from configuration.
//!
//! An [`OperatorTable`] is a dialect described entirely by data:
//!
//! ```json
//! {
//!   "name": "warehouse",
//!   "binary": { "<=>": { "text": "IS NOT DISTINCT FROM", "precedence": 3 } },
//!   "unary": { "exists": { "text": "EXISTS" } }
//! }
//! ```
//!
//! On its own it only knows the listed operators. Layered over a built-in
//! dialect with [`OperatorTable::over`] it adds to, or overrides, that
//! dialect's operators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Dialect, OperatorInfo};

/// Errors raised while loading an operator table.
#[derive(Debug, Error)]
pub enum DialectConfigError {
    /// The document is not a valid operator table.
    #[error("invalid operator table: {0}")]
    Json(#[from] serde_json::Error),

    /// An operator is declared with an empty symbol.
    #[error("operator table '{table}' declares an operator with an empty symbol")]
    EmptySymbol {
        /// Name of the offending table.
        table: String,
    },

    /// An operator is declared without SQL text.
    #[error("operator '{symbol}' in table '{table}' has no SQL text")]
    EmptyText {
        /// Name of the offending table.
        table: String,
        /// The operator symbol.
        symbol: String,
    },
}

fn default_name() -> String {
    String::from("custom")
}

/// A dialect defined by explicit operator maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorTable {
    /// Name reported by [`Dialect::name`].
    #[serde(default = "default_name")]
    pub name: String,
    /// Binary operators by symbol.
    #[serde(default)]
    pub binary: BTreeMap<String, OperatorInfo>,
    /// Unary operators by symbol.
    #[serde(default)]
    pub unary: BTreeMap<String, OperatorInfo>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new(default_name())
    }
}

impl OperatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binary: BTreeMap::new(),
            unary: BTreeMap::new(),
        }
    }

    /// Parses and validates a JSON operator table.
    ///
    /// # Errors
    ///
    /// Fails if the JSON does not describe an operator table, or if an
    /// entry has an empty symbol or empty SQL text.
    pub fn from_json(json: &str) -> Result<Self, DialectConfigError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks that every entry has a symbol and SQL text.
    ///
    /// # Errors
    ///
    /// Returns the first offending entry.
    pub fn validate(&self) -> Result<(), DialectConfigError> {
        for (symbol, info) in self.binary.iter().chain(&self.unary) {
            if symbol.trim().is_empty() {
                return Err(DialectConfigError::EmptySymbol {
                    table: self.name.clone(),
                });
            }
            if info.text.trim().is_empty() {
                return Err(DialectConfigError::EmptyText {
                    table: self.name.clone(),
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(())
    }

    /// Adds a binary operator.
    #[must_use]
    pub fn with_binary(
        mut self,
        symbol: impl Into<String>,
        text: impl Into<String>,
        precedence: u8,
    ) -> Self {
        let text: String = text.into();
        self.binary
            .insert(symbol.into(), OperatorInfo::binary(text, precedence));
        self
    }

    /// Adds a unary operator.
    #[must_use]
    pub fn with_unary(mut self, symbol: impl Into<String>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        self.unary.insert(symbol.into(), OperatorInfo::unary(text));
        self
    }

    /// Layers this table over `base`.
    #[must_use]
    pub const fn over<D: Dialect>(self, base: D) -> Layered<D> {
        Layered { table: self, base }
    }

    fn find(map: &BTreeMap<String, OperatorInfo>, symbol: &str) -> Option<OperatorInfo> {
        map.get(symbol)
            .or_else(|| {
                map.iter()
                    .find(|(candidate, _)| candidate.eq_ignore_ascii_case(symbol))
                    .map(|(_, info)| info)
            })
            .cloned()
    }
}

impl Dialect for OperatorTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        Self::find(&self.binary, symbol)
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        Self::find(&self.unary, symbol)
    }
}

/// An operator table layered over another dialect.
///
/// Lookups try the table first and fall back to the base dialect.
#[derive(Debug, Clone)]
pub struct Layered<D> {
    table: OperatorTable,
    base: D,
}

impl<D: Dialect> Layered<D> {
    /// Returns the overriding table.
    #[must_use]
    pub const fn table(&self) -> &OperatorTable {
        &self.table
    }

    /// Returns the base dialect.
    #[must_use]
    pub const fn base(&self) -> &D {
        &self.base
    }
}

impl<D: Dialect> Dialect for Layered<D> {
    fn name(&self) -> &str {
        self.table.name()
    }

    fn binary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        self.table
            .binary_operator(symbol)
            .or_else(|| self.base.binary_operator(symbol))
    }

    fn unary_operator(&self, symbol: &str) -> Option<OperatorInfo> {
        self.table
            .unary_operator(symbol)
            .or_else(|| self.base.unary_operator(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;

    const WAREHOUSE: &str = r#"{
        "name": "warehouse",
        "binary": {
            "<=>": { "text": "IS NOT DISTINCT FROM", "precedence": 3 },
            "+": { "text": "+", "precedence": 20 }
        },
        "unary": { "exists": { "text": "EXISTS" } }
    }"#;

    #[test]
    fn test_from_json() {
        let table = OperatorTable::from_json(WAREHOUSE).unwrap();
        assert_eq!(table.name(), "warehouse");
        assert_eq!(
            table.binary_operator("<=>"),
            Some(OperatorInfo::binary("IS NOT DISTINCT FROM", 3))
        );
        assert_eq!(table.unary_operator("EXISTS").unwrap().text, "EXISTS");
        assert!(table.binary_operator("*").is_none());
    }

    #[test]
    fn test_name_defaults() {
        let table = OperatorTable::from_json("{}").unwrap();
        assert_eq!(table.name(), "custom");
        assert!(table.binary.is_empty());
    }

    #[test]
    fn test_rejects_empty_text() {
        let err = OperatorTable::from_json(r#"{"binary": {"+": {"text": " "}}}"#).unwrap_err();
        assert!(matches!(err, DialectConfigError::EmptyText { ref symbol, .. } if symbol == "+"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = OperatorTable::from_json(r#"{"binary": 3}"#).unwrap_err();
        assert!(matches!(err, DialectConfigError::Json(_)));
    }

    #[test]
    fn test_layered_overrides_and_falls_back() {
        let dialect = OperatorTable::from_json(WAREHOUSE)
            .unwrap()
            .over(GenericDialect::new());

        assert_eq!(dialect.name(), "warehouse");
        assert_eq!(dialect.table().name, "warehouse");
        assert_eq!(dialect.base().name(), "generic");
        assert!(dialect.base().binary_operator("<=>").is_none());
        assert_eq!(dialect.binary_operator("+").unwrap().precedence, 20);
        assert_eq!(dialect.binary_operator("*").unwrap().precedence, 9);
        assert_eq!(dialect.unary_operator("not").unwrap().text, "NOT");
        assert!(dialect.binary_operator("glob").is_none());
    }

    #[test]
    fn test_builder_methods() {
        let table = OperatorTable::new("tiny")
            .with_binary("plus", "+", 1)
            .with_unary("neg", "-");
        assert_eq!(table.binary_operator("PLUS").unwrap().text, "+");
        assert_eq!(table.unary_operator("neg").unwrap().text, "-");
    }
}
