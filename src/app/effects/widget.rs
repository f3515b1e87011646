// SPDX-License-Identifier: GPL-3.0-only

//! Celebration overlay widget
//!
//! Renders the confetti field directly with the renderer and lays hearts
//! out as positioned text glyphs. Positions arrive as stage fractions and
//! are scaled to the actual bounds at layout and draw time. The widget
//! never captures events, so controls underneath stay clickable.

use cosmic::iced::advanced::widget::Tree;
use cosmic::iced::advanced::{Layout, Widget, layout, mouse, renderer};
use cosmic::iced::{Border, Color, Element, Length, Point, Rectangle, Size};
use cosmic::widget;
use cosmic::{Renderer, Theme};

use crate::app::state::Message;

use super::confetti::{CONFETTI_COLORS, ConfettiPiece};
use super::hearts::Heart;

/// Confetti rectangle size in logical pixels
const PIECE_WIDTH: f32 = 8.0;
const PIECE_HEIGHT: f32 = 5.0;

/// Heart glyph size at scale 1.0
const HEART_BASE_SIZE: f32 = 28.0;

/// Overlay drawing the confetti and heart fields
pub struct EffectsOverlay<'a> {
    pieces: Vec<ConfettiPiece>,
    /// Stage-fraction position per heart glyph
    placements: Vec<(f32, f32)>,
    glyphs: Vec<Element<'a, Message, Theme, Renderer>>,
}

impl<'a> EffectsOverlay<'a> {
    /// Snapshot the current effect state into a drawable overlay
    pub fn new(pieces: Vec<ConfettiPiece>, hearts: &[Heart]) -> Self {
        let mut placements = Vec::new();
        let mut glyphs: Vec<Element<'a, Message, Theme, Renderer>> = Vec::new();
        for heart in hearts.iter().filter(|h| h.is_visible()) {
            let color = Color::from_rgba(0.96, 0.35, 0.55, heart.opacity);
            placements.push((heart.x, heart.y));
            glyphs.push(
                widget::container(widget::text("♥").size(HEART_BASE_SIZE * heart.scale))
                    .style(move |_theme| widget::container::Style {
                        text_color: Some(color),
                        ..Default::default()
                    })
                    .into(),
            );
        }

        Self {
            pieces,
            placements,
            glyphs,
        }
    }
}

impl<'a> Widget<Message, Theme, Renderer> for EffectsOverlay<'a> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn children(&self) -> Vec<Tree> {
        self.glyphs.iter().map(Tree::new).collect()
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(&mut self.glyphs);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.max();

        let glyph_nodes: Vec<layout::Node> = self
            .placements
            .iter()
            .zip(self.glyphs.iter())
            .zip(tree.children.iter_mut())
            .map(|(((x, y), glyph), child_tree)| {
                let glyph_limits = layout::Limits::new(Size::ZERO, Size::new(64.0, 64.0));
                let node = glyph.as_widget().layout(child_tree, renderer, &glyph_limits);
                let glyph_size = node.size();

                // Center the glyph on its stage-fraction position
                node.move_to(Point::new(
                    x * size.width - glyph_size.width / 2.0,
                    y * size.height - glyph_size.height / 2.0,
                ))
            })
            .collect();

        layout::Node::with_children(size, glyph_nodes)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        use cosmic::iced::advanced::Renderer as _;

        let bounds = layout.bounds();

        // Hearts first so confetti falls over them
        for ((glyph, child_tree), child_layout) in self
            .glyphs
            .iter()
            .zip(tree.children.iter())
            .zip(layout.children())
        {
            glyph.as_widget().draw(
                child_tree,
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }

        for piece in &self.pieces {
            let (r, g, b) = CONFETTI_COLORS[piece.color_index % CONFETTI_COLORS.len()];
            let piece_bounds = Rectangle {
                x: bounds.x + piece.x * bounds.width - PIECE_WIDTH / 2.0,
                y: bounds.y + piece.y * bounds.height - PIECE_HEIGHT / 2.0,
                width: PIECE_WIDTH,
                height: PIECE_HEIGHT,
            };

            renderer.fill_quad(
                renderer::Quad {
                    bounds: piece_bounds,
                    border: Border {
                        radius: 1.0.into(),
                        ..Default::default()
                    },
                    shadow: Default::default(),
                },
                Color::from_rgba(r, g, b, piece.opacity()),
            );
        }
    }
}

impl<'a> From<EffectsOverlay<'a>> for Element<'a, Message, Theme, Renderer> {
    fn from(widget: EffectsOverlay<'a>) -> Self {
        Element::new(widget)
    }
}
