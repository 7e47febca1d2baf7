/// Quote a command token for display so the echoed line stays unambiguous.
///
/// This is only used for log output; tokens are handed to the child as a
/// discrete argument vector and never pass through a shell.
pub fn display_token(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }

    if token.chars().all(is_plain_char) {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

fn is_plain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | ':' | '@' | '=' | '+' | ',')
}

/// Join tokens into a single printable command line.
pub fn display_command<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(display_token).collect::<Vec<_>>().join(" ")
}
