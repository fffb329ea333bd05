//! Test definitions attached to a task.
//!
//! These records are evaluated by the test runner elsewhere in the
//! application. Here they are only carried through, so inputs and outputs are
//! kept as raw JSON values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single input together with every output accepted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: Value,
    pub allowed_outputs: Vec<Value>,
}

/// A named group of test cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub id: String,
    pub human_readable_name: String,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

/// Detects a known buggy implementation by comparing outputs with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuggyOutputTest {
    pub buggy_function_name: String,
    #[serde(default)]
    pub ignored_test_suite_ids: Vec<String>,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Feedback triggered by a particular pass/fail pattern across suites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteLevelTest {
    #[serde(default)]
    pub test_suite_ids_that_must_pass: Vec<String>,
    #[serde(default)]
    pub test_suite_ids_that_must_fail: Vec<String>,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Checks the running time of the learner's code on generated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTest {
    pub input_data_as_string: String,
    pub transformation_function_name: String,
    pub expected_performance: String,
    pub evaluation_function_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_suite_deserializes_camel_case() {
        let suite: TestSuite = serde_json::from_value(json!({
            "id": "GENERAL_CASE",
            "humanReadableName": "the general case",
            "testCases": [{"input": "(())", "allowedOutputs": [true]}]
        }))
        .unwrap();

        assert_eq!(suite.human_readable_name, "the general case");
        assert_eq!(suite.test_cases.len(), 1);
        assert_eq!(suite.test_cases[0].input, json!("(())"));
        assert_eq!(suite.test_cases[0].allowed_outputs, vec![json!(true)]);
    }

    #[test]
    fn test_suite_level_test_defaults() {
        let test: SuiteLevelTest = serde_json::from_value(json!({
            "testSuiteIdsThatMustPass": ["GENERAL_CASE"]
        }))
        .unwrap();
        assert_eq!(test.test_suite_ids_that_must_pass, vec!["GENERAL_CASE"]);
        assert!(test.test_suite_ids_that_must_fail.is_empty());
        assert!(test.messages.is_empty());
    }
}
