use serde::Serialize;

/// Color with channels normalized to the 0.0-1.0 range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Same channels with the alpha replaced
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: Some(a), ..self }
    }

    /// Alpha, treating a missing channel as fully opaque
    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }
}

/// A fill or stroke paint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid {
            color,
            opacity: None,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Paint::Solid { color, .. } => *color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    Normal,
}

/// Visual effect attached to a node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    #[serde(rename_all = "camelCase")]
    DropShadow {
        color: Color,
        offset: Vector,
        radius: f64,
        spread: f64,
        visible: bool,
        blend_mode: BlendMode,
    },
}
