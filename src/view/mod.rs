//! Declarative views: pure functions from input values to a [`Node`] tree.

mod node;
mod profile_card;

pub use node::{
    Arrangement, Column, Dp, HorizontalAlign, ImageNode, Node, Shape, TextAlign, TextNode,
};
pub use profile_card::{AVATAR_ASSET, AVATAR_SIZE, SCREEN_PADDING, profile_card_view, profile_view};
