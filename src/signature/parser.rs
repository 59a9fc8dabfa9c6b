use crate::error::{Result, ScaffoldError};

use super::types::RawSignature;

/// Extracts a [`RawSignature`] from one line of source text.
///
/// Everything before the method name (access specifiers, return types,
/// `static`, `virtual`, ...) is discarded by keeping only the last
/// whitespace-separated token before the first `(`. Multi-word return types
/// and identifier-like template arguments are absorbed the same way.
///
/// Nested parentheses are not understood: the parameter text ends at the
/// first `)` on the line, so default arguments such as `int x = f()` or
/// function-pointer parameters are truncated there.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignatureParser;

impl SignatureParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Split `line` into method name and raw parameter text.
    ///
    /// # Errors
    /// - `EmptySelection` if the line is empty or whitespace only.
    /// - `InvalidSignature` if `(` or `)` is missing, `)` comes first, or no
    ///   name precedes the `(` once `Class::` and `*`/`&` are stripped.
    pub fn parse(&self, line: &str) -> Result<RawSignature> {
        if line.trim().is_empty() {
            return Err(ScaffoldError::EmptySelection);
        }

        let invalid = |reason: &'static str| ScaffoldError::InvalidSignature {
            line: line.trim().to_string(),
            reason,
        };

        let open = line.find('(').ok_or_else(|| invalid("missing `(`"))?;
        let close = line.find(')').ok_or_else(|| invalid("missing `)`"))?;
        if close < open {
            return Err(invalid("`)` appears before `(`"));
        }

        let name = line[..open]
            .split_whitespace()
            .next_back()
            .ok_or_else(|| invalid("no method name before `(`"))?;
        if unqualify(name).is_empty() {
            return Err(invalid("no method name before `(`"));
        }

        Ok(RawSignature {
            name: name.to_string(),
            args_raw: line[open + 1..close].to_string(),
        })
    }
}

impl RawSignature {
    /// The method name without class qualification or pointer/reference sigils.
    ///
    /// `Calculator::Add` becomes `Add`, `*Create` becomes `Create`.
    #[must_use]
    pub fn unqualified_name(&self) -> &str {
        unqualify(&self.name)
    }
}

fn unqualify(name: &str) -> &str {
    let name = name.rsplit("::").next().unwrap_or(name);
    name.trim_start_matches(['*', '&'])
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
