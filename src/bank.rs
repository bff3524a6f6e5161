use crate::error::QuizError;
use crate::grading::{MAX_OPTIONS, label_index};
use crate::models::{Question, QuestionId, QuestionKind};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: QuestionId,
    #[serde(rename = "type")]
    kind: QuestionKind,
    #[serde(rename = "question", alias = "text")]
    text: String,
    options: Vec<String>,
    answer: Vec<String>,
    #[serde(default)]
    explanation: Option<String>,
}

/// Ordered, read-only list of questions for one session.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    name: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateId(q.id));
            }
        }
        Ok(Self {
            name: name.into(),
            questions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

pub fn list_quiz_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

pub fn load_quiz(path: &Path) -> Result<QuestionBank, QuizError> {
    let content = fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "quiz".to_string());
    parse_quiz(&name, &content)
}

pub fn parse_quiz(name: &str, json: &str) -> Result<QuestionBank, QuizError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(json)?;
    let questions = raw
        .into_iter()
        .map(validate_question)
        .collect::<Result<Vec<_>, _>>()?;
    QuestionBank::new(name, questions)
}

fn validate_question(raw: RawQuestion) -> Result<Question, QuizError> {
    let id = raw.id;

    if raw.options.is_empty() {
        return Err(QuizError::invalid(id, "has no options"));
    }
    if raw.options.len() > MAX_OPTIONS {
        return Err(QuizError::invalid(
            id,
            format!("has {} options, at most {} are labelled", raw.options.len(), MAX_OPTIONS),
        ));
    }
    if raw.answer.is_empty() {
        return Err(QuizError::invalid(id, "answer key is empty"));
    }
    if raw.kind.is_exclusive() && raw.answer.len() > 1 {
        return Err(QuizError::invalid(
            id,
            format!("{} question has more than one answer", raw.kind.display_name()),
        ));
    }

    let mut answer = Vec::with_capacity(raw.answer.len());
    for label in &raw.answer {
        let mut chars = label.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(QuizError::invalid(id, format!("answer label {:?} is not a letter", label))),
        };
        match label_index(letter) {
            Some(i) if i < raw.options.len() => {}
            _ => {
                return Err(QuizError::invalid(
                    id,
                    format!("answer label {:?} does not name an option", label),
                ));
            }
        }
        if answer.contains(&letter) {
            return Err(QuizError::invalid(id, format!("answer label {:?} repeated", label)));
        }
        answer.push(letter);
    }
    answer.sort_unstable();

    Ok(Question {
        id,
        kind: raw.kind,
        text: raw.text,
        options: raw.options,
        answer,
        explanation: raw.explanation.filter(|e| !e.trim().is_empty()),
    })
}
