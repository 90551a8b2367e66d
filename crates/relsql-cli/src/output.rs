//! Rendering compilation results.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::info;

use relsql_core::{Dialect, SqlFragment};

/// Writes the SQL of `fragment` to `out`, or one `error:` line per error to
/// `err`.
///
/// # Errors
///
/// Fails when the fragment holds errors, or when writing fails.
pub fn write_fragment(
    fragment: SqlFragment,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match fragment.into_result() {
        Ok(sql) => {
            writeln!(out, "{sql}")?;
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                writeln!(err, "error: {error}")?;
            }
            info!(count = errors.len(), "Compilation failed");
            bail!("compilation failed with {} error(s)", errors.len())
        }
    }
}

/// Writes how `dialect` renders `symbol`.
///
/// # Errors
///
/// Fails when writing fails.
pub fn write_operator(dialect: &dyn Dialect, symbol: &str, out: &mut impl Write) -> Result<()> {
    let binary = dialect.binary_operator(symbol);
    let unary = dialect.unary_operator(symbol);

    if binary.is_none() && unary.is_none() {
        writeln!(out, "{symbol:<12} unknown in {}", dialect.name())?;
        return Ok(());
    }
    if let Some(info) = binary {
        writeln!(
            out,
            "{symbol:<12} binary  {:<24} precedence {}",
            info.text, info.precedence
        )?;
    }
    if let Some(info) = unary {
        writeln!(out, "{symbol:<12} unary   {}", info.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use relsql_core::{Compiler, GenericDialect};

    use super::*;
    use crate::input::Document;

    fn compile(json: &str) -> SqlFragment {
        let compiler = Compiler::new();
        match Document::from_json(json).unwrap() {
            Document::Relation(relation) => compiler.compile_relation(&relation),
            Document::Expression(expr) => compiler.compile_expression(&expr),
        }
    }

    fn render(fragment: SqlFragment) -> (Result<()>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = write_fragment(fragment, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_writes_sql() {
        let fragment = compile(
            r#"{"relation": {"projection": {
                "select_list": [{"attribute": {"name": "id"}}],
                "relation": {"table": {"name": "users"}}
            }}}"#,
        );

        let (result, out, err) = render(fragment);
        assert!(result.is_ok());
        assert_eq!(out, "SELECT id FROM users\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_writes_every_error() {
        let fragment = compile(
            r#"{"relation": {"projection": {"select_list": [
                {"parameter": "p"},
                {"binary": {
                    "op": "<=>",
                    "left": {"literal": {"integer": 1}},
                    "right": {"literal": {"integer": 2}}
                }}
            ]}}}"#,
        );

        let (result, out, err) = render(fragment);
        let result = result.unwrap_err();
        assert_eq!(result.to_string(), "compilation failed with 2 error(s)");
        assert!(out.is_empty());
        assert_eq!(
            err.lines().collect::<Vec<_>>(),
            [
                "error: unsupported feature: parameter binding",
                "error: unknown binary operator '<=>'",
            ]
        );
    }

    #[test]
    fn test_writes_operator() {
        let dialect = GenericDialect::new();
        let mut out = Vec::new();
        write_operator(&dialect, "and", &mut out).unwrap();
        write_operator(&dialect, "-", &mut out).unwrap();
        write_operator(&dialect, "glob", &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("and") && lines[0].ends_with("precedence 2"));
        assert!(lines[1].contains("binary") && lines[1].ends_with("precedence 8"));
        assert!(lines[2].contains("unary"));
        assert_eq!(lines[3], "glob         unknown in generic");
    }
}
