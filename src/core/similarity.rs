use strsim::normalized_levenshtein;

/// Score a fuzzy, substring-tolerant similarity between a query and a block
/// of field text on a 0-100 scale.
///
/// The shorter of the two strings is slid over every equal-length window of
/// the longer one and the best normalized Levenshtein ratio wins, so a short
/// keyword buried in a long description still scores high.
///
/// Comparison is case-insensitive. Empty or whitespace-only input on either
/// side scores 0.
pub fn partial_similarity(query: &str, text: &str) -> u32 {
    let query = query.trim().to_lowercase();
    let text = text.trim().to_lowercase();

    if query.is_empty() || text.is_empty() {
        return 0;
    }

    let (needle, haystack) = if query.chars().count() <= text.chars().count() {
        (query, text)
    } else {
        (text, query)
    };

    let needle_len = needle.chars().count();
    let haystack: Vec<char> = haystack.chars().collect();

    let mut best = 0.0_f64;
    for start in 0..=(haystack.len() - needle_len) {
        let window: String = haystack[start..start + needle_len].iter().collect();
        let ratio = normalized_levenshtein(&needle, &window);
        if ratio > best {
            best = ratio;
            if best >= 1.0 {
                break;
            }
        }
    }

    (best * 100.0).round() as u32
}
