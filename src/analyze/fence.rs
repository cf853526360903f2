/// Models often wrap JSON output in markdown code fences despite being
/// told not to. Strip one leading fence (optionally tagged, e.g.
/// ```` ```json ````) and one trailing fence; anything inside is left
/// alone so fenced content that happens to contain backticks survives.
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();

    if let Some(rest) = s.strip_prefix("```") {
        // Optional language tag occupies the remainder of the fence line.
        // Some models jam the tag straight against the payload with no
        // newline (```json{...}); that tag goes too.
        s = match rest.find('\n') {
            Some(i) if rest[..i].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &rest[i + 1..]
            }
            _ if rest.get(..4).map_or(false, |t| t.eq_ignore_ascii_case("json")) => &rest[4..],
            _ => rest,
        };
    }

    if let Some(rest) = s.trim_end().strip_suffix("```") {
        s = rest;
    }

    s.trim()
}
