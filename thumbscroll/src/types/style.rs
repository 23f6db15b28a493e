use serde::Deserialize;

use super::{Color, Direction, Overflow, Position};

/// Visual style of one rendered layer (container, scroll view, track, thumb).
///
/// Every field is optional so a caller-supplied style can be merged over the
/// built-in defaults field by field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerStyle {
    pub flex: Option<f32>,
    pub flex_direction: Option<Direction>,
    pub position: Option<Position>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin_vertical: Option<f32>,
    pub border_radius: Option<f32>,
    pub overflow: Option<Overflow>,
    pub opacity: Option<f32>,
    pub background_color: Option<Color>,
}

impl LayerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn top(mut self, top: f32) -> Self {
        self.top = Some(top);
        self
    }

    pub fn right(mut self, right: f32) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: f32) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn left(mut self, left: f32) -> Self {
        self.left = Some(left);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn margin_vertical(mut self, margin: f32) -> Self {
        self.margin_vertical = Some(margin);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Returns `self` with every field set in `over` replaced by that value.
    pub fn merged(&self, over: &LayerStyle) -> LayerStyle {
        LayerStyle {
            flex: over.flex.or(self.flex),
            flex_direction: over.flex_direction.or(self.flex_direction),
            position: over.position.or(self.position),
            top: over.top.or(self.top),
            right: over.right.or(self.right),
            bottom: over.bottom.or(self.bottom),
            left: over.left.or(self.left),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            margin_vertical: over.margin_vertical.or(self.margin_vertical),
            border_radius: over.border_radius.or(self.border_radius),
            overflow: over.overflow.or(self.overflow),
            opacity: over.opacity.or(self.opacity),
            background_color: over
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
        }
    }
}
