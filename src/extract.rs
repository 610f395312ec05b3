use regex::Regex;

/// Extract the first `<head>...</head>` block from an HTML body.
///
/// The match is case-insensitive, non-greedy, and spans newlines. The inner
/// content is reformatted so adjacent tags sit on separate lines, wrapped in
/// lowercase `<head>`/`</head>` markers regardless of the input's casing.
/// Returns None if the body has no head block.
pub fn head_section(body: &str) -> Option<String> {
    let re = Regex::new(r"(?is)<head>(.*?)</head>").expect("Failed to compile head pattern");

    re.captures(body).map(|caps| {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        format!("<head>\n{}\n</head>", insert_tag_breaks(inner))
    })
}

/// Insert a line break wherever one tag ends and the next immediately
/// begins. Only the literal `><` boundary is rewritten; whitespace already
/// sitting between tags is left as-is.
fn insert_tag_breaks(inner: &str) -> String {
    inner.replace("><", ">\n<")
}
