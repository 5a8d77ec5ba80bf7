//! placeholder command - print the sentinel configuration

use anyhow::Result;

use crate::cli::args::DialectArg;
use crate::core::placeholder;

/// Print the built-in placeholder configuration in one serialized form.
///
/// Defaults to the JSON form, which is what build pipelines embed. Output
/// goes straight to stdout so it can be piped into a build step.
pub fn placeholder(dialect: Option<DialectArg>) -> Result<()> {
    let forms = placeholder::builtin();
    let text = match dialect.unwrap_or(DialectArg::Json) {
        DialectArg::Json => &forms.json,
        DialectArg::Js => &forms.js_literal,
    };
    println!("{}", text);
    Ok(())
}
