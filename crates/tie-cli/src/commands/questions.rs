use anyhow::{Context, Result};
use tie_core::question::{Question, QuestionRepository};
use tie_infrastructure::{FileQuestionRepository, TieConfig};

pub fn list(config: &TieConfig) -> Result<()> {
    let repo = FileQuestionRepository::new(&config.question_dir);
    let ids = repo.list_ids().with_context(|| {
        format!("Failed to list questions in {}", config.question_dir.display())
    })?;

    if ids.is_empty() {
        println!("No questions found in {}", config.question_dir.display());
    }
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

pub fn show(config: &TieConfig, question_id: &str) -> Result<()> {
    let repo = FileQuestionRepository::new(&config.question_dir);
    let question = repo
        .get(question_id)
        .with_context(|| format!("Failed to load question '{}'", question_id))?;

    print!("{}", render_question(&question));
    Ok(())
}

/// Renders a question as a plain-text outline, one block per task.
fn render_question(question: &Question) -> String {
    let mut out = format!("{}\n", question.get_title());
    for (index, task) in question.get_tasks().iter().enumerate() {
        out.push_str(&format!(
            "\nTask {} of {}: {}\n",
            index + 1,
            question.get_num_tasks(),
            task.get_output_function_name_without_class()
        ));
        out.push_str(&format!("  {}\n", task.get_text_instructions().trim_end()));
        out.push_str(&format!(
            "  {} test suite(s), {} test case(s)\n",
            task.get_test_suites().len(),
            task.get_all_test_cases().len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tie_core::question::QuestionDict;

    #[test]
    fn test_render_question() {
        let dict: QuestionDict = serde_json::from_value(json!({
            "title": "Balanced Parentheses",
            "starterCode": "",
            "tasks": [{
                "instructions": [
                    {"type": "text", "content": "Implement isBalanced()."},
                    {"type": "code", "content": "Input: \"()\""}
                ],
                "outputFunctionName": "AuxiliaryCode.isBalanced"
            }]
        }))
        .unwrap();
        let question = Question::create(dict).unwrap();

        assert_eq!(
            render_question(&question),
            "Balanced Parentheses\n\
             \nTask 1 of 1: isBalanced\n  Implement isBalanced().\n  0 test suite(s), 0 test case(s)\n"
        );
    }

    #[test]
    fn test_render_question_lists_every_task() {
        let dict: QuestionDict = serde_json::from_value(json!({
            "title": "Strings",
            "starterCode": "",
            "tasks": [{
                "instructions": [{"type": "text", "content": "First."}],
                "outputFunctionName": "AuxiliaryCode.lettersOnly",
                "testSuites": [{"id": "A", "humanReadableName": "a", "testCases": [
                    {"input": "ab1", "allowedOutputs": ["ab"]},
                    {"input": "", "allowedOutputs": [""]}
                ]}]
            }, {
                "instructions": [{"type": "code", "content": "x"}],
                "outputFunctionName": "extendString"
            }]
        }))
        .unwrap();
        let question = Question::create(dict).unwrap();

        assert_eq!(
            render_question(&question),
            "Strings\n\
             \nTask 1 of 2: lettersOnly\n  First.\n  1 test suite(s), 2 test case(s)\n\
             \nTask 2 of 2: extendString\n  \n  0 test suite(s), 0 test case(s)\n"
        );
    }
}
