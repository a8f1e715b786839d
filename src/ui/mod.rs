//! Lays out a view tree on the terminal.

mod avatar;
mod density;

use std::borrow::Cow;

use ratatui::layout::{Constraint, Flex, Layout, Margin};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::assets::LoadedAssets;
use crate::theme::Theme;
use crate::view::{Arrangement, Column, HorizontalAlign, Node, TextAlign, TextNode};

pub use avatar::AvatarWidget;
pub use density::Density;

const TAB: &str = "    ";

/// Everything the renderer needs besides the tree itself.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub assets: &'a LoadedAssets,
    pub density: Density,
}

pub fn render(frame: &mut Frame, tree: &Node, ctx: &RenderContext) {
    let area = frame.area();
    frame.render_widget(Block::default().style(ctx.theme.background()), area);
    render_node(frame, area, tree, ctx);
}

fn render_node(frame: &mut Frame, area: Rect, node: &Node, ctx: &RenderContext) {
    match node {
        Node::Column(column) => render_column(frame, area, column, ctx),
        Node::Image(image) => {
            let widget = AvatarWidget::new(ctx.assets.get(&image.asset), image.shape);
            frame.render_widget(widget, area);
        }
        Node::Spacer(_) => {}
        Node::Text(text) => frame.render_widget(text_paragraph(text, ctx.theme), area),
    }
}

fn render_column(frame: &mut Frame, area: Rect, column: &Column, ctx: &RenderContext) {
    let inner = area.inner(Margin::new(
        ctx.density.to_columns(column.padding),
        ctx.density.to_rows(column.padding),
    ));

    let sizes: Vec<(u16, u16)> = column
        .children
        .iter()
        .map(|child| measure(child, inner.width, ctx))
        .collect();

    let rows = Layout::vertical(sizes.iter().map(|&(_, height)| Constraint::Length(height)))
        .flex(arrangement_flex(column.arrangement))
        .split(inner);

    for ((child, &(width, _)), row) in column.children.iter().zip(&sizes).zip(rows.iter()) {
        let [cell] = Layout::horizontal([Constraint::Length(width)])
            .flex(horizontal_flex(column.horizontal))
            .areas(*row);
        render_node(frame, cell, child, ctx);
    }
}

/// Width and height in cells a node wants when offered `available` columns.
fn measure(node: &Node, available: u16, ctx: &RenderContext) -> (u16, u16) {
    let density = ctx.density;
    match node {
        Node::Column(column) => {
            let pad_x = density.to_columns(column.padding).saturating_mul(2);
            let pad_y = density.to_rows(column.padding).saturating_mul(2);
            let inner = available.saturating_sub(pad_x);
            let (width, height) = column
                .children
                .iter()
                .map(|child| measure(child, inner, ctx))
                .fold((0u16, 0u16), |(w, h), (cw, ch)| {
                    (w.max(cw), h.saturating_add(ch))
                });
            let width = if column.fill {
                available
            } else {
                width.saturating_add(pad_x).min(available)
            };
            (width, height.saturating_add(pad_y))
        }
        Node::Image(image) => (
            density.to_columns(image.size).min(available),
            density.to_rows(image.size),
        ),
        Node::Spacer(height) => (0, density.to_rows(*height)),
        Node::Text(text) => {
            let natural = Text::from(expand_tabs(&text.content)).width();
            let width = u16::try_from(natural).unwrap_or(u16::MAX).min(available);
            let lines = text_paragraph(text, ctx.theme).line_count(width.max(1));
            let height = u16::try_from(lines).unwrap_or(u16::MAX).max(1);
            (width, height)
        }
    }
}

fn text_paragraph<'a>(text: &'a TextNode, theme: &Theme) -> Paragraph<'a> {
    let alignment = match text.align {
        TextAlign::Start => Alignment::Left,
        TextAlign::Center => Alignment::Center,
        TextAlign::End => Alignment::Right,
    };
    Paragraph::new(expand_tabs(&text.content))
        .style(theme.style(text.style))
        .alignment(alignment)
        .wrap(Wrap { trim: false })
}

/// The terminal drops tab characters, so draw them as spaces.
fn expand_tabs(content: &str) -> Cow<'_, str> {
    if content.contains('\t') {
        Cow::Owned(content.replace('\t', TAB))
    } else {
        Cow::Borrowed(content)
    }
}

fn arrangement_flex(arrangement: Arrangement) -> Flex {
    match arrangement {
        Arrangement::Top => Flex::Start,
        Arrangement::Center => Flex::Center,
        Arrangement::Bottom => Flex::End,
    }
}

fn horizontal_flex(align: HorizontalAlign) -> Flex {
    match align {
        HorizontalAlign::Start => Flex::Start,
        HorizontalAlign::Center => Flex::Center,
        HorizontalAlign::End => Flex::End,
    }
}
