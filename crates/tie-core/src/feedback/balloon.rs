//! Speech balloon domain model.
//!
//! A speech balloon is a single message bubble in the conversation log: either
//! code submitted by the learner or feedback given by TIE.

use crate::error::{Result, TieError};
use crate::feedback::paragraph::{FeedbackParagraph, FeedbackParagraphDict};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Who a balloon comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SpeechBalloonType {
    /// Code submitted by the learner.
    Code,
    /// Feedback given by TIE.
    Feedback,
}

/// Plain-record form of a [`SpeechBalloon`].
///
/// Field names match the records exchanged with the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechBalloonDict {
    #[serde(rename = "type")]
    pub balloon_type: String,
    pub feedback_paragraph_dicts: Vec<FeedbackParagraphDict>,
}

/// A single message bubble in the conversation log.
///
/// Balloons are immutable once built. Use [`SpeechBalloon::create_feedback_balloon`],
/// [`SpeechBalloon::create_code_balloon`] or [`SpeechBalloon::from_dict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechBalloon {
    balloon_type: SpeechBalloonType,
    feedback_paragraphs: Vec<FeedbackParagraph>,
}

impl SpeechBalloon {
    fn new(balloon_type: SpeechBalloonType, feedback_paragraphs: Vec<FeedbackParagraph>) -> Self {
        Self {
            balloon_type,
            feedback_paragraphs,
        }
    }

    /// Creates a balloon holding feedback given by TIE.
    pub fn create_feedback_balloon(feedback_paragraphs: Vec<FeedbackParagraph>) -> Self {
        Self::new(SpeechBalloonType::Feedback, feedback_paragraphs)
    }

    /// Creates a balloon holding code submitted by the learner.
    ///
    /// The balloon always contains exactly one code paragraph.
    pub fn create_code_balloon(submitted_code: impl Into<String>) -> Self {
        let code_paragraphs = vec![FeedbackParagraph::create_code_paragraph(submitted_code)];
        Self::new(SpeechBalloonType::Code, code_paragraphs)
    }

    pub fn get_type(&self) -> SpeechBalloonType {
        self.balloon_type
    }

    pub fn get_feedback_paragraphs(&self) -> &[FeedbackParagraph] {
        &self.feedback_paragraphs
    }

    /// Feedback balloons are displayed on the left of the conversation log.
    pub fn is_displayed_on_left(&self) -> bool {
        self.balloon_type == SpeechBalloonType::Feedback
    }

    pub fn is_code_submission(&self) -> bool {
        self.balloon_type == SpeechBalloonType::Code
    }

    /// Converts the balloon to its plain-record form.
    pub fn to_dict(&self) -> SpeechBalloonDict {
        SpeechBalloonDict {
            balloon_type: self.balloon_type.to_string(),
            feedback_paragraph_dicts: self
                .feedback_paragraphs
                .iter()
                .map(FeedbackParagraph::to_dict)
                .collect(),
        }
    }

    /// Rebuilds a balloon from its plain-record form.
    ///
    /// # Errors
    ///
    /// Returns [`TieError::InvalidEnumValue`] if `type` is neither `code` nor
    /// `feedback`, or if any paragraph carries an unknown type.
    pub fn from_dict(dict: &SpeechBalloonDict) -> Result<Self> {
        let balloon_type = SpeechBalloonType::from_str(&dict.balloon_type)
            .map_err(|_| TieError::invalid_enum_value("speech balloon", dict.balloon_type.as_str()))?;

        let feedback_paragraphs = dict
            .feedback_paragraph_dicts
            .iter()
            .map(FeedbackParagraph::from_dict)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(balloon_type, feedback_paragraphs))
    }
}
