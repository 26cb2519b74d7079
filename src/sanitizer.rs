/// Replace characters that are illegal or confusing in file names on common
/// filesystems with readable equivalents.
///
/// Each character is substituted once, left to right; replacement text is
/// never re-scanned. Characters not in the table pass through unchanged.
pub fn sanitise(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for c in name.chars() {
        match c {
            ':' => out.push_str(" --"),
            '/' | '\\' => out.push_str(" or "),
            '<' => out.push('('),
            '>' => out.push(')'),
            '"' => out.push('\''),
            '|' => out.push(','),
            '?' => out.push('!'),
            '*' => out.push('x'),
            other => out.push(other),
        }
    }

    out
}
