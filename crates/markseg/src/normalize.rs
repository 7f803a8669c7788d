//! Spacing normalization of a rendered sentence

/// Rewrite rules, applied in order on every pass.
///
/// `$ ` keeps the set-lookup marker glued to its name, and `anon ` merges
/// the anonymous-node identifier used by triple patterns.
const RULES: [(&str, &str); 3] = [("$ ", "$"), ("  ", " "), ("anon ", "anon")];

/// Apply the rewrite rules until none of them changes the string, then trim.
///
/// The result is a fixed point: normalizing it again returns it unchanged.
pub fn normalize(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = apply_rules(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current.trim().to_string()
}

fn apply_rules(input: &str) -> String {
    let mut result = input.to_string();
    for (from, to) in RULES {
        while result.contains(from) {
            result = result.replace(from, to);
        }
    }
    result
}

/// Remove a literal `<tag>` … `</tag>` pair surrounding the whole string.
pub fn strip_wrapper<'a>(rendered: &'a str, tag: &str) -> &'a str {
    let trimmed = rendered.trim();
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    match trimmed
        .strip_prefix(open.as_str())
        .and_then(|rest| rest.strip_suffix(close.as_str()))
    {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}
