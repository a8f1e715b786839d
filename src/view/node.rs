//! Typed layout nodes produced by views and consumed by the renderer.

use crate::assets::AssetId;
use crate::theme::StyleToken;

/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dp(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical placement of a column's children as a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arrangement {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Rectangle,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Column(Column),
    Image(ImageNode),
    Spacer(Dp),
    Text(TextNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    /// Take the whole area offered by the parent instead of wrapping children.
    pub fill: bool,
    pub padding: Dp,
    pub horizontal: HorizontalAlign,
    pub arrangement: Arrangement,
    pub children: Vec<Node>,
}

/// A square image of `size`, clipped to `shape`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub asset: AssetId,
    pub description: String,
    pub size: Dp,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub content: String,
    pub style: StyleToken,
    pub align: TextAlign,
}

impl Node {
    /// Visits this node and all descendants depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Column(column) = self {
            for child in &column.children {
                child.walk(visit);
            }
        }
    }

    /// Text content of every text node, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text(text) = node {
                texts.push(text.content.as_str());
            }
        });
        texts
    }
}
