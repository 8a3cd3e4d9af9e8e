/// Escape a value for embedding in a TeamCity service message.
///
/// Every reserved character (`'`, `[`, `]`, `|`, newline, carriage return)
/// is prefixed with the `|` escape marker; newline and carriage return are
/// additionally rewritten to the letters `n` and `r`, so they appear on the
/// wire as `|n` / `|r` rather than escaped control bytes.
///
/// Not idempotent: escaping twice double-escapes. Escape exactly once per
/// value.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '\'' | '[' | ']' | '|' => {
                out.push('|');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
