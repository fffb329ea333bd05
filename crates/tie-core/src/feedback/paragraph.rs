//! Feedback paragraph domain model.
//!
//! A paragraph is one rendered block of content inside a speech balloon.

use crate::error::{Result, TieError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// The kind of content a paragraph holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FeedbackParagraphType {
    /// Plain prose.
    Text,
    /// A code listing.
    Code,
    /// An error message, e.g. a runtime or syntax error.
    Error,
    /// An image; the content is the image file name.
    Image,
}

/// Plain-record form of a [`FeedbackParagraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackParagraphDict {
    #[serde(rename = "type")]
    pub paragraph_type: String,
    pub content: String,
}

/// A single block of content within a speech balloon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackParagraph {
    paragraph_type: FeedbackParagraphType,
    content: String,
}

impl FeedbackParagraph {
    fn new(paragraph_type: FeedbackParagraphType, content: impl Into<String>) -> Self {
        Self {
            paragraph_type,
            content: content.into(),
        }
    }

    pub fn create_text_paragraph(text: impl Into<String>) -> Self {
        Self::new(FeedbackParagraphType::Text, text)
    }

    pub fn create_code_paragraph(code: impl Into<String>) -> Self {
        Self::new(FeedbackParagraphType::Code, code)
    }

    pub fn create_error_paragraph(error: impl Into<String>) -> Self {
        Self::new(FeedbackParagraphType::Error, error)
    }

    pub fn create_image_paragraph(image_filename: impl Into<String>) -> Self {
        Self::new(FeedbackParagraphType::Image, image_filename)
    }

    pub fn get_type(&self) -> FeedbackParagraphType {
        self.paragraph_type
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn is_text_paragraph(&self) -> bool {
        self.paragraph_type == FeedbackParagraphType::Text
    }

    pub fn is_code_paragraph(&self) -> bool {
        self.paragraph_type == FeedbackParagraphType::Code
    }

    pub fn is_error_paragraph(&self) -> bool {
        self.paragraph_type == FeedbackParagraphType::Error
    }

    pub fn is_image_paragraph(&self) -> bool {
        self.paragraph_type == FeedbackParagraphType::Image
    }

    /// Converts the paragraph to its plain-record form.
    pub fn to_dict(&self) -> FeedbackParagraphDict {
        FeedbackParagraphDict {
            paragraph_type: self.paragraph_type.to_string(),
            content: self.content.clone(),
        }
    }

    /// Rebuilds a paragraph from its plain-record form.
    ///
    /// # Errors
    ///
    /// Returns [`TieError::InvalidEnumValue`] if `type` is not one of
    /// `text`, `code`, `error` or `image`.
    pub fn from_dict(dict: &FeedbackParagraphDict) -> Result<Self> {
        let paragraph_type = FeedbackParagraphType::from_str(&dict.paragraph_type).map_err(|_| {
            TieError::invalid_enum_value("feedback paragraph", dict.paragraph_type.as_str())
        })?;
        Ok(Self::new(paragraph_type, dict.content.as_str()))
    }
}
