//! Loading trees and dialects from disk.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use relsql_core::dialect::{Dialect, OperatorTable, dialect_by_name};
use relsql_core::{Expr, Relation};

/// A tree to compile, as read from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Document {
    /// A full relation (`{"relation": ...}`).
    Relation(Relation),
    /// A single expression (`{"expression": ...}`).
    Expression(Expr),
}

impl Document {
    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("input is not a relation or expression document")
    }

    /// Reads a document from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?
        };
        Self::from_json(&json)
    }
}

/// Builds the active dialect: a built-in one, optionally overlaid with an
/// operator table file.
pub fn build_dialect(name: &str, operators: Option<&Path>) -> Result<Box<dyn Dialect>> {
    let base = dialect_by_name(name)
        .with_context(|| format!("unknown dialect '{name}' (expected generic, sqlite, or postgres)"))?;

    let Some(path) = operators else {
        return Ok(base);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read operator table {}", path.display()))?;
    let table = OperatorTable::from_json(&json)
        .with_context(|| format!("failed to load operator table {}", path.display()))?;
    debug!(
        table = %table.name,
        binary = table.binary.len(),
        unary = table.unary.len(),
        base = base.name(),
        "Layering operator table"
    );

    Ok(Box::new(table.over(base)))
}
