use crate::models::{Grade, Question, Selection};

const FIRST_LABEL: u8 = b'A';
pub const MAX_OPTIONS: usize = 26;

/// Letter for a zero-based option position: 0 -> 'A', 1 -> 'B', ...
pub fn option_label(index: usize) -> Option<char> {
    if index < MAX_OPTIONS {
        Some((FIRST_LABEL + index as u8) as char)
    } else {
        None
    }
}

pub fn label_index(label: char) -> Option<usize> {
    if label.is_ascii_uppercase() {
        Some((label as u8 - FIRST_LABEL) as usize)
    } else {
        None
    }
}

/// Compares the labels derived from `selection` against the answer key.
///
/// Callers reject empty selections before grading; an empty selection here
/// simply never matches a non-empty key.
pub fn grade(question: &Question, selection: &Selection) -> Grade {
    let mut labels: Vec<char> = selection.iter().filter_map(|&i| option_label(i)).collect();
    labels.sort_unstable();

    let mut key = question.answer.clone();
    key.sort_unstable();

    if labels == key {
        Grade::Correct
    } else {
        Grade::Wrong
    }
}
