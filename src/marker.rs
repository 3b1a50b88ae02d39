use regex::Regex;

/// Scan a completion reply for an embedded image request of the literal
/// form `[IMAGE: <phrase>]`. The keyword is case-insensitive, whitespace
/// after the colon is optional and the phrase runs to the first `]`. Only
/// the first occurrence in the reply counts.
pub fn find_image_request(reply: &str) -> Option<String> {
    let re = Regex::new(r"(?i)\[IMAGE:\s*(.*?)\]").unwrap();
    re.captures(reply)
        .map(|captures| captures[1].trim().to_string())
}
