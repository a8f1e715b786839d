mod profile;

pub use profile::{
    DEFAULT_DISPLAY_NAME, DEFAULT_QUESTION_TEXT, DEFAULT_STUDENT_ID, Profile,
};
