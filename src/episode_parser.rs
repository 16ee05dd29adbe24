use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EpisodeSelection {
    All,
    Set(HashSet<u32>),
}

impl EpisodeSelection {
    pub fn contains(&self, episode: u32) -> bool {
        match self {
            EpisodeSelection::All => true,
            EpisodeSelection::Set(episodes) => episodes.contains(&episode),
        }
    }
}

/// Turn user input like "all", "1", "1-10" or "1,2,3,7-10" into a selection.
/// Clauses that don't parse are dropped, the rest still count.
pub fn parse_episode_selection(input: &str) -> EpisodeSelection {
    let input = input.trim();
    if input.eq_ignore_ascii_case("all") {
        return EpisodeSelection::All;
    }

    let mut episodes = HashSet::new();
    for part in input.split(',') {
        let part = part.trim();
        if let Some((start, end)) = part.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.trim().parse::<u32>(), end.trim().parse::<u32>()) {
                // "10-7" means the same span as "7-10"
                let (low, high) = if start <= end { (start, end) } else { (end, start) };
                episodes.extend(low..=high);
            }
        } else if let Ok(episode) = part.parse::<u32>() {
            episodes.insert(episode);
        }
    }
    EpisodeSelection::Set(episodes)
}
