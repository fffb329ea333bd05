//! Infrastructure for TIE: path resolution, configuration and file-backed
//! question loading.

pub mod config;
pub mod file_question_repository;
pub mod paths;

pub use crate::config::TieConfig;
pub use crate::file_question_repository::FileQuestionRepository;
pub use crate::paths::TiePaths;
