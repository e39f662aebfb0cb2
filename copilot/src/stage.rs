//! Stage (level) records and approximate search over them.
//!
//! DESIGN
//! ======
//! Scores follow the Fuse convention: `0.0` is a perfect match, `1.0` is a
//! complete mismatch. A field scores the minimum edit distance between the
//! query and any substring of the field, divided by the query length, so
//! typing a fragment of a stage code or chapter name still matches.
//! Results are ordered by `level_id`, never by score, so the autocomplete list
//! does not reshuffle while typing.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use serde::{Deserialize, Serialize};

/// Default maximum score still counted as a match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// One selectable stage, as served by the level API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Stable identifier, stored as the operation's `stage_name`.
    #[serde(alias = "level_id")]
    pub level_id: String,
    #[serde(default, alias = "stage_id")]
    pub stage_id: String,
    /// Display name, e.g. `坍塌`.
    pub name: String,
    /// Top category, e.g. `主题曲`.
    #[serde(default, alias = "cat_one")]
    pub cat_one: String,
    /// Chapter or event, e.g. `序章`.
    #[serde(default, alias = "cat_two")]
    pub cat_two: String,
    /// Stage code, e.g. `0-1`.
    #[serde(default, alias = "cat_three")]
    pub cat_three: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

impl Level {
    /// Label shown in the autocomplete list and the input once selected.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} {}", self.cat_three, self.name)
    }

    fn search_fields(&self) -> [&str; 4] {
        [&self.name, &self.cat_one, &self.cat_two, &self.cat_three]
    }
}

/// Search index over a fixed level list.
#[derive(Clone, Debug, Default)]
pub struct StageIndex {
    levels: Vec<Level>,
    threshold: f64,
}

impl StageIndex {
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        Self {
            levels,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Levels matching `query`, sorted by `level_id`. A blank query returns
    /// every level.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Level> {
        let query = query.trim();
        let mut hits: Vec<&Level> = if query.is_empty() {
            self.levels.iter().collect()
        } else {
            let pattern: Vec<char> = query.to_lowercase().chars().collect();
            self.levels
                .iter()
                .filter(|level| score_level(level, &pattern) <= self.threshold)
                .collect()
        };
        hits.sort_by(|a, b| a.level_id.cmp(&b.level_id));
        hits
    }

    /// Exact lookup by `level_id`.
    #[must_use]
    pub fn find_by_id(&self, level_id: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.level_id == level_id)
    }

    /// Best score of `level` against `query` across all searched fields.
    #[must_use]
    pub fn score(level: &Level, query: &str) -> f64 {
        let pattern: Vec<char> = query.trim().to_lowercase().chars().collect();
        score_level(level, &pattern)
    }
}

fn score_level(level: &Level, pattern: &[char]) -> f64 {
    level
        .search_fields()
        .iter()
        .map(|field| score_field(pattern, field))
        .fold(1.0, f64::min)
}

#[allow(clippy::cast_precision_loss)]
fn score_field(pattern: &[char], field: &str) -> f64 {
    if pattern.is_empty() {
        return 0.0;
    }
    let text: Vec<char> = field.to_lowercase().chars().collect();
    let distance = substring_distance(pattern, &text);
    (distance as f64 / pattern.len() as f64).min(1.0)
}

/// Minimum edit distance between `pattern` and any substring of `text`
/// (Sellers' variant of Levenshtein: free start and end positions in `text`).
fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let m = pattern.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut cur = vec![0; m + 1];
    let mut best = prev[m];

    for &tc in text {
        cur[0] = 0;
        for i in 1..=m {
            let substitution = prev[i - 1] + usize::from(pattern[i - 1] != tc);
            cur[i] = substitution.min(prev[i] + 1).min(cur[i - 1] + 1);
        }
        best = best.min(cur[m]);
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}
