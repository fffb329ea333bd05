//! Conversation log model.
//!
//! Holds the balloons exchanged during one attempt at a question, oldest first.

use crate::error::{Result, TieError};
use crate::feedback::balloon::{SpeechBalloon, SpeechBalloonDict};
use crate::feedback::paragraph::FeedbackParagraph;

/// Ordered list of speech balloons for one question attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    balloons: Vec<SpeechBalloon>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_balloon(&mut self, balloon: SpeechBalloon) {
        self.balloons.push(balloon);
    }

    pub fn add_code_balloon(&mut self, submitted_code: impl Into<String>) {
        self.add_balloon(SpeechBalloon::create_code_balloon(submitted_code));
    }

    pub fn add_feedback_balloon(&mut self, feedback_paragraphs: Vec<FeedbackParagraph>) {
        self.add_balloon(SpeechBalloon::create_feedback_balloon(feedback_paragraphs));
    }

    pub fn get_balloons(&self) -> &[SpeechBalloon] {
        &self.balloons
    }

    pub fn len(&self) -> usize {
        self.balloons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balloons.is_empty()
    }

    pub fn num_code_submissions(&self) -> usize {
        self.balloons
            .iter()
            .filter(|balloon| balloon.is_code_submission())
            .count()
    }

    /// Returns the code of the most recent submission, if any.
    pub fn last_code_submission(&self) -> Option<&str> {
        self.balloons
            .iter()
            .rev()
            .find(|balloon| balloon.is_code_submission())
            .and_then(|balloon| balloon.get_feedback_paragraphs().first())
            .map(FeedbackParagraph::get_content)
    }

    pub fn to_dicts(&self) -> Vec<SpeechBalloonDict> {
        self.balloons.iter().map(SpeechBalloon::to_dict).collect()
    }

    /// Rebuilds a log from balloon records.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid record with [`TieError::InvalidLogEntry`]
    /// carrying its position.
    pub fn from_dicts(dicts: &[SpeechBalloonDict]) -> Result<Self> {
        let balloons = dicts
            .iter()
            .enumerate()
            .map(|(index, dict)| {
                SpeechBalloon::from_dict(dict).map_err(|e| TieError::invalid_log_entry(index, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { balloons })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_log_is_empty() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.num_code_submissions(), 0);
        assert_eq!(log.last_code_submission(), None);
    }

    #[test]
    fn test_last_code_submission_skips_feedback() {
        let mut log = ConversationLog::new();
        log.add_code_balloon("v1");
        log.add_feedback_balloon(vec![FeedbackParagraph::create_text_paragraph("Not quite.")]);
        log.add_code_balloon("v2");
        log.add_feedback_balloon(vec![FeedbackParagraph::create_text_paragraph("Better.")]);

        assert_eq!(log.len(), 4);
        assert_eq!(log.num_code_submissions(), 2);
        assert_eq!(log.last_code_submission(), Some("v2"));
    }

    #[test]
    fn test_dicts_round_trip_preserves_order() {
        let mut log = ConversationLog::new();
        log.add_code_balloon("a");
        log.add_feedback_balloon(vec![FeedbackParagraph::create_error_paragraph("boom")]);

        let restored = ConversationLog::from_dicts(&log.to_dicts()).unwrap();
        assert_eq!(restored, log);
        assert!(restored.get_balloons()[0].is_code_submission());
        assert!(restored.get_balloons()[1].is_displayed_on_left());
    }

    #[test]
    fn test_from_dicts_reports_bad_index() {
        let dicts: Vec<SpeechBalloonDict> = serde_json::from_value(json!([
            {"type": "code", "feedbackParagraphDicts": [{"type": "code", "content": "x"}]},
            {"type": "question", "feedbackParagraphDicts": []}
        ]))
        .unwrap();

        let err = ConversationLog::from_dicts(&dicts).unwrap_err();
        assert!(matches!(err, TieError::InvalidLogEntry { index: 1, .. }));
        assert!(err.is_invalid_enum_value());
    }
}
