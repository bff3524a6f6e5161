use crate::grading;
use crate::models::{Grade, Question, QuestionId, QuestionKind, Selection};
use std::collections::HashMap;

/// Per-question selections and grades for one session.
///
/// Entries are created lazily on first interaction and only discarded with
/// the whole session.
#[derive(Debug, Default, Clone)]
pub struct AnswerState {
    selections: HashMap<QuestionId, Selection>,
    results: HashMap<QuestionId, Grade>,
}

impl AnswerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_selection(&mut self, id: QuestionId, option: usize, kind: QuestionKind) {
        let selection = self.selections.entry(id).or_default();
        match kind {
            QuestionKind::Single | QuestionKind::Boolean => {
                selection.clear();
                selection.insert(option);
            }
            QuestionKind::Multiple => {
                if !selection.remove(&option) {
                    selection.insert(option);
                }
            }
        }
    }

    pub fn selection(&self, id: QuestionId) -> Selection {
        self.selections.get(&id).cloned().unwrap_or_default()
    }

    pub fn is_selected(&self, id: QuestionId, option: usize) -> bool {
        self.selections
            .get(&id)
            .is_some_and(|selection| selection.contains(&option))
    }

    /// Whether the question was ever touched, even if every choice was
    /// toggled off again.
    pub fn has_entry(&self, id: QuestionId) -> bool {
        self.selections.contains_key(&id)
    }

    pub fn has_answer(&self, id: QuestionId) -> bool {
        self.selections.get(&id).is_some_and(|s| !s.is_empty())
    }

    pub fn result(&self, id: QuestionId) -> Option<Grade> {
        self.results.get(&id).copied()
    }

    /// Grades `question` from its current selection unless it already has a
    /// grade. Returns the grade only when one was newly recorded.
    pub fn grade(&mut self, question: &Question) -> Option<Grade> {
        if self.results.contains_key(&question.id) {
            return None;
        }
        let selection = self.selections.get(&question.id)?;
        let grade = grading::grade(question, selection);
        self.results.insert(question.id, grade);
        Some(grade)
    }

    /// Questions touched at least once.
    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }
}
