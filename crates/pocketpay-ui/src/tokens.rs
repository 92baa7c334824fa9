//! Design tokens and the inline-style builder.
//!
//! Widgets never hard-code colors or timings; they read these constants and
//! assemble `style` attributes with [`Style`].

// === Colors ===
pub const INK: &str = "#0f172a";
pub const INK_MUTED: &str = "#64748b";
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_SUNKEN: &str = "#f1f5f9";
pub const BRAND: &str = "#4f46e5";
pub const BRAND_SOFT: &str = "rgba(79, 70, 229, 0.12)";
pub const SUCCESS: &str = "#16a34a";
pub const DANGER: &str = "#dc2626";
pub const SCRIM: &str = "rgba(15, 23, 42, 0.45)";
pub const SHADOW: &str = "rgba(15, 23, 42, 0.25)";

// === Spacing (px) ===
pub const SPACE_1: u32 = 4;
pub const SPACE_2: u32 = 8;
pub const SPACE_3: u32 = 12;
pub const SPACE_4: u32 = 16;
pub const SPACE_6: u32 = 24;

// === Radii (px) ===
pub const RADIUS_SM: u32 = 8;
pub const RADIUS_MD: u32 = 12;
pub const RADIUS_LG: u32 = 20;
pub const RADIUS_PILL: u32 = 999;

// === Motion ===
pub const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";
pub const DURATION_FAST_MS: u32 = 150;
pub const DURATION_SHEET_MS: u32 = 280;
pub const DURATION_INDICATOR_MS: u32 = 250;

/// `perspective()` distance for tilted cards
pub const TILT_PERSPECTIVE_PX: u32 = 800;

/// Transition shorthand for `property` with a token duration.
pub fn transition(property: &str, duration_ms: u32) -> String {
    format!("{} {}ms {}", property, duration_ms, EASE_OUT)
}

/// Ordered list of CSS declarations rendered into a `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing an earlier value for it.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn px(self, property: &'static str, value: impl Into<f64>) -> Self {
        self.set(property, format!("{:.1}px", value.into()))
    }

    pub fn build(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
