use crate::domain::entities::trade::Trade;

/// Words that mark a note as a lesson worth resurfacing.
pub const LEARNING_KEYWORDS: [&str; 7] = [
    "learn",
    "lesson",
    "mistake",
    "improve",
    "remember",
    "avoid",
    "next time",
];

pub const MAX_LEARNING_POINTS: usize = 10;

pub fn is_learning_point(text: &str) -> bool {
    let lower = text.to_lowercase();
    LEARNING_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Notes that mention a learning keyword, newest trade first, deduplicated
/// by exact text.
pub fn learning_points(trades: &[Trade]) -> Vec<String> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut points: Vec<String> = Vec::new();
    for trade in ordered {
        let note = trade.notes.trim();
        if note.is_empty() || !is_learning_point(note) {
            continue;
        }
        if points.iter().any(|p| p == note) {
            continue;
        }
        points.push(note.to_string());
        if points.len() == MAX_LEARNING_POINTS {
            break;
        }
    }
    points
}
