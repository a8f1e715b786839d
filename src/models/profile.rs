use serde::Deserialize;

pub const DEFAULT_DISPLAY_NAME: &str = "HUYNH NGOC CONG";
pub const DEFAULT_STUDENT_ID: &str = "CN22CLCF";
pub const DEFAULT_QUESTION_TEXT: &str =
    "Mong muốn và định hướng của Bạn là gì sau khi học xong môn học là gì?";

/// The three values a profile card is mounted with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub display_name: String,
    pub student_id: String,
    pub question_text: String,
}

impl Profile {
    pub fn new(
        display_name: impl Into<String>,
        student_id: impl Into<String>,
        question_text: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            student_id: student_id.into(),
            question_text: question_text.into(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_NAME, DEFAULT_STUDENT_ID, DEFAULT_QUESTION_TEXT)
    }
}
