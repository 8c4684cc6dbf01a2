//! Vote icon colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Fill used for a vote control that is switched off.
pub const NEUTRAL_HEX: &str = "#687074";
/// Fill used for a vote control that is switched on.
pub const ACCENT_HEX: &str = "#f48024";

/// Render token for a vote icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Neutral,
    Accent,
}

impl ColorToken {
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Neutral => NEUTRAL_HEX,
            Self::Accent => ACCENT_HEX,
        }
    }

    /// Inline SVG style applying this color as the path fill.
    ///
    /// No trailing `;`: Leptos appends its own separator to `style` values.
    #[must_use]
    pub fn fill_style(self) -> String {
        format!("fill: {}", self.hex())
    }
}

/// Map a toggle state to its icon color.
#[must_use]
pub fn color_for(active: bool) -> ColorToken {
    if active { ColorToken::Accent } else { ColorToken::Neutral }
}
