use crate::models::{LocatedCandidate, ServiceRecord};

/// Longest description excerpt shown per entry, in characters
const DESCRIPTION_EXCERPT_CHARS: usize = 160;

/// Closing notice appended to every reply, match or no match
const CLOSING_NOTICE: &str =
    "If you'd rather talk it through with a person, reply HELP and one of our \
     coordinators will get back to you.";

/// Render the ranked candidates into the single user-facing text block.
///
/// An empty ranking produces an apology naming the category and location; a
/// non-empty one produces a header plus one entry per candidate with name,
/// phone number, a short description and a reference link. Either way the
/// human-fallback notice closes the message.
pub fn build_reply(
    ranked: &[LocatedCandidate],
    records: &[ServiceRecord],
    category: &str,
    location_label: &str,
) -> String {
    if ranked.is_empty() {
        return format!(
            "Sorry, I couldn't find any \"{}\" services near {}. \
             You could try a different keyword or another nearby location.\n\n{}",
            category, location_label, CLOSING_NOTICE
        );
    }

    let mut reply = format!(
        "Here's what I found for \"{}\" near {}:\n",
        category, location_label
    );

    for (position, candidate) in ranked.iter().enumerate() {
        let record = &records[candidate.record_index];

        let name = record.name.as_deref().unwrap_or("(unnamed provider)");
        let phone = record.phone_number.as_deref().unwrap_or("no phone listed");

        reply.push_str(&format!("\n{}. {} - {}", position + 1, name, phone));

        if let Some(description) = short_description(record) {
            reply.push_str(&format!("\n   {}", description));
        }
        if let Some(link) = record.full_filename.as_deref() {
            reply.push_str(&format!("\n   More info: {}", link));
        }
        reply.push('\n');
    }

    reply.push_str(&format!("\n{}", CLOSING_NOTICE));
    reply
}

/// Pick the best available descriptive field and trim it to excerpt length.
fn short_description(record: &ServiceRecord) -> Option<String> {
    let text = [
        record.search_description.as_deref(),
        record.services.as_deref(),
        record.about_me.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|t| !t.is_empty())?;

    let excerpt: String = text.chars().take(DESCRIPTION_EXCERPT_CHARS).collect();
    if excerpt.chars().count() < text.chars().count() {
        Some(format!("{}...", excerpt.trim_end()))
    } else {
        Some(excerpt)
    }
}
