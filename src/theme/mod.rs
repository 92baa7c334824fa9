//! Visual theme: design tokens and the global stylesheet.
//!
//! The stylesheet refers to colors and timings through CSS custom
//! properties; [`root_variables`] renders those from the shared tokens so
//! inline styles and class styles never disagree.

mod styles;

pub use pocketpay_ui::tokens;
pub use styles::GLOBAL_STYLES;

/// `:root { --token: value; ... }` block built from [`tokens`].
pub fn root_variables() -> String {
    let vars = [
        ("--ink", tokens::INK.to_string()),
        ("--ink-muted", tokens::INK_MUTED.to_string()),
        ("--surface", tokens::SURFACE.to_string()),
        ("--surface-sunken", tokens::SURFACE_SUNKEN.to_string()),
        ("--brand", tokens::BRAND.to_string()),
        ("--brand-soft", tokens::BRAND_SOFT.to_string()),
        ("--success", tokens::SUCCESS.to_string()),
        ("--danger", tokens::DANGER.to_string()),
        ("--scrim", tokens::SCRIM.to_string()),
        ("--shadow", tokens::SHADOW.to_string()),
        ("--space-1", format!("{}px", tokens::SPACE_1)),
        ("--space-2", format!("{}px", tokens::SPACE_2)),
        ("--space-3", format!("{}px", tokens::SPACE_3)),
        ("--space-4", format!("{}px", tokens::SPACE_4)),
        ("--space-6", format!("{}px", tokens::SPACE_6)),
        ("--radius-sm", format!("{}px", tokens::RADIUS_SM)),
        ("--radius-md", format!("{}px", tokens::RADIUS_MD)),
        ("--radius-lg", format!("{}px", tokens::RADIUS_LG)),
        ("--radius-pill", format!("{}px", tokens::RADIUS_PILL)),
        ("--ease-out", tokens::EASE_OUT.to_string()),
        ("--duration-fast", format!("{}ms", tokens::DURATION_FAST_MS)),
        ("--duration-sheet", format!("{}ms", tokens::DURATION_SHEET_MS)),
    ];
    let body: String = vars
        .iter()
        .map(|(name, value)| format!("  {}: {};\n", name, value))
        .collect();
    format!(":root {{\n{}}}\n", body)
}
