//! Feedback domain module.
//!
//! Models the conversation log shown next to the editor: learner code
//! submissions and TIE feedback, each rendered as a speech balloon made of
//! feedback paragraphs.
//!
//! # Module Structure
//!
//! - `paragraph`: `FeedbackParagraph` and its plain record
//! - `balloon`: `SpeechBalloon` and its plain record
//! - `conversation_log`: ordered balloons for one attempt

mod balloon;
mod conversation_log;
mod paragraph;

// Re-export public API
pub use balloon::{SpeechBalloon, SpeechBalloonDict, SpeechBalloonType};
pub use conversation_log::ConversationLog;
pub use paragraph::{FeedbackParagraph, FeedbackParagraphDict, FeedbackParagraphType};
