//! Question domain model.
//!
//! A question is a sequence of tasks the learner works through in order. Each
//! task carries its instructions and the tests used to produce feedback.

use crate::error::{Result, TieError};
use crate::question::test_suite::{
    BuggyOutputTest, PerformanceTest, SuiteLevelTest, TestCase, TestSuite,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// How an instruction is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum InstructionType {
    /// Prose shown as a paragraph.
    Text,
    /// A code or example block.
    Code,
}

/// Plain-record form of an [`Instruction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionDict {
    pub content: String,
    #[serde(rename = "type")]
    pub instruction_type: String,
}

/// One block of a task's instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub content: String,
    pub instruction_type: InstructionType,
}

impl Instruction {
    pub fn from_dict(dict: &InstructionDict) -> Result<Self> {
        let instruction_type = InstructionType::from_str(&dict.instruction_type).map_err(|_| {
            TieError::invalid_enum_value("instruction", dict.instruction_type.as_str())
        })?;
        Ok(Self {
            content: dict.content.clone(),
            instruction_type,
        })
    }

    pub fn to_dict(&self) -> InstructionDict {
        InstructionDict {
            content: self.content.clone(),
            instruction_type: self.instruction_type.to_string(),
        }
    }
}

/// Plain-record form of a [`Task`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDict {
    pub instructions: Vec<InstructionDict>,
    pub output_function_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_function_name: Option<String>,
    #[serde(default)]
    pub test_suites: Vec<TestSuite>,
    #[serde(default)]
    pub buggy_output_tests: Vec<BuggyOutputTest>,
    #[serde(default)]
    pub suite_level_tests: Vec<SuiteLevelTest>,
    #[serde(default)]
    pub performance_tests: Vec<PerformanceTest>,
}

/// One exercise unit within a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    instructions: Vec<Instruction>,
    output_function_name: String,
    input_function_name: Option<String>,
    main_function_name: Option<String>,
    test_suites: Vec<TestSuite>,
    buggy_output_tests: Vec<BuggyOutputTest>,
    suite_level_tests: Vec<SuiteLevelTest>,
    performance_tests: Vec<PerformanceTest>,
}

impl Task {
    /// Builds a task from its record.
    ///
    /// # Errors
    ///
    /// Returns [`TieError::InvalidEnumValue`] if an instruction type is neither
    /// `text` nor `code`.
    pub fn create(dict: TaskDict) -> Result<Self> {
        let instructions = dict
            .instructions
            .iter()
            .map(Instruction::from_dict)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            instructions,
            output_function_name: dict.output_function_name,
            input_function_name: dict.input_function_name,
            main_function_name: dict.main_function_name,
            test_suites: dict.test_suites,
            buggy_output_tests: dict.buggy_output_tests,
            suite_level_tests: dict.suite_level_tests,
            performance_tests: dict.performance_tests,
        })
    }

    pub fn get_instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Concatenates the text instructions, each followed by a single space.
    ///
    /// Code instructions are skipped. The result is empty when the task has
    /// no text instructions.
    pub fn get_text_instructions(&self) -> String {
        self.instructions
            .iter()
            .filter(|instruction| instruction.instruction_type == InstructionType::Text)
            .fold(String::new(), |mut text, instruction| {
                text.push_str(&instruction.content);
                text.push(' ');
                text
            })
    }

    /// The possibly class-qualified name of the function whose output is evaluated.
    pub fn get_output_function_name(&self) -> &str {
        &self.output_function_name
    }

    /// Strips the qualifying class from the output function name.
    ///
    /// `"AuxiliaryCode.lettersOnly"` becomes `"lettersOnly"`. A name without a
    /// `.` is returned as is.
    pub fn get_output_function_name_without_class(&self) -> &str {
        match self.output_function_name.rsplit_once('.') {
            Some((_, function_name)) => function_name,
            None => &self.output_function_name,
        }
    }

    pub fn get_input_function_name(&self) -> Option<&str> {
        self.input_function_name.as_deref()
    }

    pub fn get_main_function_name(&self) -> Option<&str> {
        self.main_function_name.as_deref()
    }

    pub fn get_test_suites(&self) -> &[TestSuite] {
        &self.test_suites
    }

    pub fn get_buggy_output_tests(&self) -> &[BuggyOutputTest] {
        &self.buggy_output_tests
    }

    pub fn get_suite_level_tests(&self) -> &[SuiteLevelTest] {
        &self.suite_level_tests
    }

    pub fn get_performance_tests(&self) -> &[PerformanceTest] {
        &self.performance_tests
    }

    /// All test cases of all suites, in suite order.
    pub fn get_all_test_cases(&self) -> Vec<&TestCase> {
        self.test_suites
            .iter()
            .flat_map(|suite| suite.test_cases.iter())
            .collect()
    }

    pub fn to_dict(&self) -> TaskDict {
        TaskDict {
            instructions: self.instructions.iter().map(Instruction::to_dict).collect(),
            output_function_name: self.output_function_name.clone(),
            input_function_name: self.input_function_name.clone(),
            main_function_name: self.main_function_name.clone(),
            test_suites: self.test_suites.clone(),
            buggy_output_tests: self.buggy_output_tests.clone(),
            suite_level_tests: self.suite_level_tests.clone(),
            performance_tests: self.performance_tests.clone(),
        }
    }
}

/// Plain-record form of a [`Question`], as found in question data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDict {
    pub title: String,
    pub starter_code: String,
    #[serde(default)]
    pub auxiliary_code: String,
    pub tasks: Vec<TaskDict>,
}

/// A coding exercise made of one or more tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    title: String,
    starter_code: String,
    auxiliary_code: String,
    tasks: Vec<Task>,
}

impl Question {
    /// Builds a question from its record.
    ///
    /// # Errors
    ///
    /// Fails if any task fails to build.
    pub fn create(dict: QuestionDict) -> Result<Self> {
        let tasks = dict
            .tasks
            .into_iter()
            .map(Task::create)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: dict.title,
            starter_code: dict.starter_code,
            auxiliary_code: dict.auxiliary_code,
            tasks,
        })
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_starter_code(&self) -> &str {
        &self.starter_code
    }

    pub fn get_auxiliary_code(&self) -> &str {
        &self.auxiliary_code
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_num_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_last_task(&self, index: usize) -> bool {
        index.checked_add(1) == Some(self.tasks.len())
    }

    pub fn to_dict(&self) -> QuestionDict {
        QuestionDict {
            title: self.title.clone(),
            starter_code: self.starter_code.clone(),
            auxiliary_code: self.auxiliary_code.clone(),
            tasks: self.tasks.iter().map(Task::to_dict).collect(),
        }
    }
}
