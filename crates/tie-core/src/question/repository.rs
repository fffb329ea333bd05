//! Question repository trait.
//!
//! Defines the interface for loading question definitions.

use super::model::Question;
use crate::error::Result;

/// An abstract source of question definitions.
///
/// Decouples the domain from where question data lives (data files bundled
/// with the app, a directory on disk, an in-memory fixture).
pub trait QuestionRepository: Send + Sync {
    /// Retrieves a question by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Question)`: The question, with all tasks built
    /// - `Err(TieError::NotFound)`: No question with this id
    /// - `Err(TieError)`: The definition could not be read or is invalid
    fn get(&self, question_id: &str) -> Result<Question>;

    /// Lists the ids of all available questions, sorted.
    fn list_ids(&self) -> Result<Vec<String>>;
}
