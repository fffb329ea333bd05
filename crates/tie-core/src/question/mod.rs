//! Question domain module.
//!
//! This module contains the question and task models, the test records
//! attached to tasks, and the repository interface for loading questions.
//!
//! # Module Structure
//!
//! - `model`: `Question`, `Task`, `Instruction` and their plain records
//! - `test_suite`: test suites, buggy-output, suite-level and performance tests
//! - `repository`: `QuestionRepository` trait
//!
//! # Usage
//!
//! ```ignore
//! use tie_core::question::{Question, QuestionDict, Task};
//! use tie_core::question::QuestionRepository;
//! ```

mod model;
pub mod repository;
mod test_suite;

// Re-export public API
pub use model::{
    Instruction, InstructionDict, InstructionType, Question, QuestionDict, Task, TaskDict,
};
pub use test_suite::{BuggyOutputTest, PerformanceTest, SuiteLevelTest, TestCase, TestSuite};

pub use repository::QuestionRepository;
