/// Application name
pub const APP_NAME: &str = "Courier";

/// Smallest accepted interface font size in pixels
pub const FONT_SIZE_MIN_PX: u8 = 12;

/// Largest accepted interface font size in pixels
pub const FONT_SIZE_MAX_PX: u8 = 20;

/// Font size applied when no explicit choice has been made
pub const DEFAULT_FONT_SIZE_PX: u8 = 16;

/// How many call-history entries the "recent" filter returns (fixed
/// prefix in list order, not a time window)
pub const RECENT_CALLS_WINDOW: usize = 3;

/// Period of the active-call duration ticker in seconds
pub const CALL_TICK_SECS: u64 = 1;

/// One accent gradient of the fixed interface palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeGradient {
    pub name: &'static str,
    /// Start colour, `#rrggbb`
    pub from: &'static str,
    /// End colour, `#rrggbb`
    pub to: &'static str,
}

/// The fixed accent palette. `DisplaySettings::theme_index` indexes into
/// this array; every screen reads the same entry.
pub static THEME_GRADIENTS: [ThemeGradient; 4] = [
    ThemeGradient {
        name: "violet",
        from: "#a855f7",
        to: "#ec4899",
    },
    ThemeGradient {
        name: "aqua",
        from: "#06b6d4",
        to: "#a855f7",
    },
    ThemeGradient {
        name: "sunset",
        from: "#f97316",
        to: "#ec4899",
    },
    ThemeGradient {
        name: "forest",
        from: "#22c55e",
        to: "#3b82f6",
    },
];
