//! Directory-backed QuestionRepository implementation

use std::fs;
use std::path::{Path, PathBuf};
use tie_core::question::{Question, QuestionDict, QuestionRepository};
use tie_core::{Result, TieError};

/// Extensions recognised as question files, in lookup order.
const QUESTION_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// A repository that reads question definitions from a directory.
///
/// Question `isBalanced` is read from `isBalanced.json`, or from
/// `isBalanced.toml` if no JSON file exists.
///
/// Responsibilities:
/// - Resolve a question id to a file
/// - Parse JSON or TOML into a `QuestionDict`
/// - Build the domain `Question`
///
/// Does NOT:
/// - Write question files
/// - Cache loaded questions
pub struct FileQuestionRepository {
    question_dir: PathBuf,
}

impl FileQuestionRepository {
    /// Creates a repository reading from `question_dir`.
    pub fn new(question_dir: impl Into<PathBuf>) -> Self {
        Self {
            question_dir: question_dir.into(),
        }
    }

    fn find_question_file(&self, question_id: &str) -> Option<PathBuf> {
        QUESTION_EXTENSIONS
            .iter()
            .map(|ext| self.question_dir.join(format!("{}.{}", question_id, ext)))
            .find(|path| path.is_file())
    }

    fn parse_question_file(path: &Path) -> Result<QuestionDict> {
        let content = fs::read_to_string(path)?;
        let dict = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        Ok(dict)
    }
}

impl QuestionRepository for FileQuestionRepository {
    fn get(&self, question_id: &str) -> Result<Question> {
        let path = self
            .find_question_file(question_id)
            .ok_or_else(|| TieError::not_found("question", question_id))?;

        tracing::debug!("Loading question '{}' from {:?}", question_id, path);
        let dict = Self::parse_question_file(&path)?;
        let question = Question::create(dict).inspect_err(|e| {
            tracing::warn!("Invalid question definition in {:?}: {}", path, e);
        })?;

        tracing::info!(
            "Loaded question '{}' with {} task(s)",
            question_id,
            question.get_num_tasks()
        );
        Ok(question)
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        if !self.question_dir.exists() {
            tracing::debug!("Question directory {:?} does not exist", self.question_dir);
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.question_dir)? {
            let path = entry?.path();
            let is_question_file = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| QUESTION_EXTENSIONS.contains(&ext));
            if !is_question_file || !path.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }

        ids.sort();
        ids.dedup();
        Ok(ids)
    }
}
