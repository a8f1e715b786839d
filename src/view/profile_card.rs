use crate::assets::AssetId;
use crate::models::Profile;
use crate::theme::StyleToken;

use super::node::{
    Arrangement, Column, Dp, HorizontalAlign, ImageNode, Node, Shape, TextAlign, TextNode,
};

pub const AVATAR_ASSET: &str = "avatar";
pub const AVATAR_SIZE: Dp = Dp(100);
pub const SCREEN_PADDING: Dp = Dp(16);
const AVATAR_GAP: Dp = Dp(16);
const TITLE_GAP: Dp = Dp(8);

/// Builds the profile card layout: avatar, "name - id" title, then the question.
pub fn profile_card_view(display_name: &str, student_id: &str, question_text: &str) -> Node {
    Node::Column(Column {
        fill: true,
        padding: SCREEN_PADDING,
        horizontal: HorizontalAlign::Center,
        arrangement: Arrangement::Center,
        children: vec![
            Node::Image(ImageNode {
                asset: AssetId::new(AVATAR_ASSET),
                description: "Avatar".to_string(),
                size: AVATAR_SIZE,
                shape: Shape::Circle,
            }),
            Node::Spacer(AVATAR_GAP),
            Node::Text(TextNode {
                content: format!("{} - {}", display_name, student_id),
                style: StyleToken::TitleMedium,
                align: TextAlign::Start,
            }),
            Node::Spacer(TITLE_GAP),
            Node::Text(TextNode {
                content: question_text.to_string(),
                style: StyleToken::BodyMedium,
                align: TextAlign::Center,
            }),
        ],
    })
}

/// Mounts a [`Profile`] into [`profile_card_view`].
pub fn profile_view(profile: &Profile) -> Node {
    profile_card_view(
        &profile.display_name,
        &profile.student_id,
        &profile.question_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_QUESTION_TEXT, Profile};

    fn children(node: &Node) -> &[Node] {
        match node {
            Node::Column(column) => &column.children,
            other => panic!("expected column, got {:?}", other),
        }
    }

    #[test]
    fn test_title_joins_name_and_id() {
        let tree = profile_card_view("HUYNH NGOC CONG", "CN22CLCF", "?");
        assert_eq!(tree.texts()[0], "HUYNH NGOC CONG - CN22CLCF");
    }

    #[test]
    fn test_question_text_is_verbatim() {
        let tree = profile_view(&Profile::default());
        let body = tree.texts()[1];
        assert_eq!(body, DEFAULT_QUESTION_TEXT);
        assert_eq!(body.as_bytes(), DEFAULT_QUESTION_TEXT.as_bytes());
    }

    #[test]
    fn test_combining_marks_are_verbatim() {
        let question = "Mo\u{0302}\u{0301}n ho\u{0323}c";
        let tree = profile_card_view("N", "I", question);
        assert_eq!(tree.texts()[1].as_bytes(), question.as_bytes());
        assert_eq!(tree.texts()[1].chars().count(), 10);
    }

    #[test]
    fn test_layout_structure() {
        let tree = profile_view(&Profile::default());
        let Node::Column(root) = &tree else {
            panic!("root must be a column");
        };
        assert!(root.fill);
        assert_eq!(root.padding, Dp(16));
        assert_eq!(root.horizontal, HorizontalAlign::Center);
        assert_eq!(root.arrangement, Arrangement::Center);

        let kids = children(&tree);
        assert_eq!(kids.len(), 5);
        assert_eq!(
            kids[0],
            Node::Image(ImageNode {
                asset: AssetId::new("avatar"),
                description: "Avatar".to_string(),
                size: Dp(100),
                shape: Shape::Circle,
            })
        );
        assert_eq!(kids[1], Node::Spacer(Dp(16)));
        assert_eq!(kids[3], Node::Spacer(Dp(8)));

        let Node::Text(title) = &kids[2] else {
            panic!("expected title text");
        };
        assert_eq!(title.style, StyleToken::TitleMedium);

        let Node::Text(body) = &kids[4] else {
            panic!("expected body text");
        };
        assert_eq!(body.style, StyleToken::BodyMedium);
        assert_eq!(body.align, TextAlign::Center);
    }

    #[test]
    fn test_view_is_idempotent() {
        let first = profile_card_view("A", "B", "C");
        let second = profile_card_view("A", "B", "C");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let tree = profile_card_view("", "", "");
        assert_eq!(tree.texts(), vec![" - ", ""]);
    }

    #[test]
    fn test_question_does_not_affect_title() {
        let a = profile_card_view("NAME", "ID1", "first question");
        let b = profile_card_view("NAME", "ID1", "một câu hỏi khác");
        assert_eq!(a.texts()[0], b.texts()[0]);
        assert_ne!(a.texts()[1], b.texts()[1]);
    }
}
