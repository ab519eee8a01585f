use crate::table::CommandTable;

/// Split a query into tokens, merging a leading multi-word command
///
/// Tokens are separated by runs of whitespace. While the first two tokens
/// joined by a space name a command in `table`, they collapse into one token.
/// Merging only ever looks at the front of the sequence and stops at the first
/// join that is not a command.
pub fn tokenize(query: &str, table: &CommandTable) -> Vec<String> {
    let mut tokens: Vec<String> = query.split_whitespace().map(str::to_string).collect();

    if tokens.len() <= 1 {
        return tokens;
    }

    while tokens.len() > 1 {
        let merged = format!("{} {}", tokens[0], tokens[1]);
        if !table.contains_key(&merged) {
            break;
        }
        tokens.splice(0..2, std::iter::once(merged));
    }

    tokens
}
