use std::fs;
use tempfile::TempDir;
use tie_core::question::QuestionRepository;
use tie_infrastructure::FileQuestionRepository;

const REVERSE_WORDS_TOML: &str = r#"
title = "Reverse Words"
starterCode = "def reverseWords(s):\n    return s\n"
auxiliaryCode = "class AuxiliaryCode(object):\n    pass\n"

[[tasks]]
outputFunctionName = "AuxiliaryCode.lettersOnly"

[[tasks.instructions]]
type = "text"
content = "For this question, you will implement isBalanced()."

[[tasks.instructions]]
type = "code"
content = "Input: \"(())\"\nOutput: True"

[[tasks.testSuites]]
id = "GENERAL_CASE"
humanReadableName = "the general case"

[[tasks.testSuites.testCases]]
input = "(())"
allowedOutputs = [true]

[[tasks]]
outputFunctionName = "System.extendString"

[[tasks.instructions]]
type = "code"
content = "some code"

[[tasks.instructions]]
type = "text"
content = "abc"

[[tasks.instructions]]
type = "text"
content = "def"
"#;

#[test]
fn test_load_toml_question() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("reverseWords.toml"), REVERSE_WORDS_TOML).unwrap();

    let repo = FileQuestionRepository::new(temp_dir.path());
    assert_eq!(repo.list_ids().unwrap(), vec!["reverseWords"]);

    let question = repo.get("reverseWords").expect("Should load question");
    assert_eq!(question.get_title(), "Reverse Words");
    assert!(question.get_auxiliary_code().starts_with("class AuxiliaryCode"));

    let tasks = question.get_tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].get_output_function_name_without_class(), "lettersOnly");
    assert_eq!(
        tasks[0].get_text_instructions(),
        "For this question, you will implement isBalanced(). "
    );
    assert_eq!(tasks[0].get_all_test_cases().len(), 1);
    assert_eq!(tasks[1].get_output_function_name_without_class(), "extendString");
    assert_eq!(tasks[1].get_text_instructions(), "abc def ");
}

#[test]
fn test_invalid_instruction_type_surfaces_domain_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("broken.json"),
        r#"{"title": "t", "starterCode": "", "tasks": [
            {"instructions": [{"type": "video", "content": "x"}], "outputFunctionName": "f"}
        ]}"#,
    )
    .unwrap();

    let repo = FileQuestionRepository::new(temp_dir.path());
    let err = repo.get("broken").unwrap_err();
    assert!(err.is_invalid_enum_value());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("bad.json"), "{\"title\": ").unwrap();

    let repo = FileQuestionRepository::new(temp_dir.path());
    let err = repo.get("bad").unwrap_err();
    assert!(err.is_serialization());
}
