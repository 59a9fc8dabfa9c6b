use indexmap::IndexMap;

use super::types::Argument;

/// The built-in type → initializer table.
///
/// Lookup is by exact, case-sensitive match on the whole type string, so
/// `const int` or `Int` get no initializer.
#[must_use]
pub fn default_initializers() -> IndexMap<String, String> {
    [
        ("int", "0"),
        ("DWORD", "0"),
        ("string", "\"\""),
        ("wstring", "L\"\""),
    ]
    .into_iter()
    .map(|(ty, init)| (ty.to_string(), init.to_string()))
    .collect()
}

/// Converts raw parameter text into ordered [`Argument`] declarations.
///
/// Each comma-separated entry is split on whitespace. With more than two
/// tokens, every token but the last forms the type (joined by single
/// spaces) and the last is the identifier. Leading `*`/`&` on the
/// identifier move onto the type. An entry with a single token is an
/// unnamed parameter and is given the identifier `arg<N>`, where N is its
/// position in the list. Default values (`= ...`) are dropped.
#[derive(Debug, Clone)]
pub struct ArgumentBinder {
    initializers: IndexMap<String, String>,
}

impl Default for ArgumentBinder {
    fn default() -> Self {
        Self::new(default_initializers())
    }
}

impl ArgumentBinder {
    #[must_use]
    pub const fn new(initializers: IndexMap<String, String>) -> Self {
        Self { initializers }
    }

    #[must_use]
    pub fn bind(&self, args_raw: &str) -> Vec<Argument> {
        let trimmed = args_raw.trim();
        if trimmed.is_empty() || trimmed == "void" {
            return Vec::new();
        }

        trimmed
            .split(',')
            .enumerate()
            .filter_map(|(position, piece)| self.bind_one(position, piece))
            .collect()
    }

    fn bind_one(&self, position: usize, piece: &str) -> Option<Argument> {
        let declaration = piece.split_once('=').map_or(piece, |(decl, _)| decl).trim();
        if declaration.is_empty() {
            return None;
        }

        let tokens: Vec<&str> = declaration.split_whitespace().collect();
        let (mut ty, mut identifier) = match tokens.split_last() {
            Some((last, rest)) if !rest.is_empty() => (rest.join(" "), (*last).to_string()),
            _ => (declaration.to_string(), String::new()),
        };

        while let Some(sigil) = identifier.chars().next().filter(|c| matches!(c, '*' | '&')) {
            ty.push(sigil);
            identifier.remove(0);
        }
        if identifier.is_empty() {
            identifier = format!("arg{position}");
        }

        let initializer = self.initializers.get(&ty).cloned();
        Some(Argument {
            ty,
            identifier,
            initializer,
        })
    }
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod tests;
