use regex::Regex;

use crate::episode_parser::EpisodeSelection;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkEntry {
    pub text: String,
    pub href: String,
}

/// Keep the entries whose name carries the wanted quality and a selected
/// episode tag like "E01"/"e12", and return their urls resolved against
/// `base_origin`. Input order is preserved, nothing is deduplicated.
pub fn match_links(
    entries: &[LinkEntry],
    quality: &str,
    selection: &EpisodeSelection,
    base_origin: &str,
) -> Vec<String> {
    let episode_tag = Regex::new(r"[Ee](\d+)").unwrap();
    let quality = quality.to_lowercase();

    let mut matched = vec![];
    for entry in entries {
        if !entry.text.to_lowercase().contains(&quality) {
            continue;
        }

        // a digit run too long for u32 is treated like a missing tag
        let episode = match episode_tag
            .captures(&entry.text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            Some(episode) => episode,
            None => continue,
        };

        if !selection.contains(episode) {
            continue;
        }

        if entry.href.starts_with('/') {
            matched.push(format!("{base_origin}{}", entry.href));
        } else {
            matched.push(entry.href.clone());
        }
    }
    matched
}
