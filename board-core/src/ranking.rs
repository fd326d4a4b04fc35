use board_types::LeaderboardEntry;

/// Number of fixed display slots on the top-players panel.
pub const PODIUM_SLOTS: usize = 3;

/// Orders entries by descending score. The sort is stable, so entries with
/// equal scores keep the server-provided relative order.
pub fn sort_by_score_desc(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

/// Maps a sorted ranking onto the three podium slots. Slots past the end of
/// the ranking come back `None` and should be rendered blank.
pub fn podium(entries: &[LeaderboardEntry]) -> [Option<&LeaderboardEntry>; PODIUM_SLOTS] {
    [entries.first(), entries.get(1), entries.get(2)]
}
