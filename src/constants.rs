use glam::Vec2;

// Shared tuning constants and static presentation data for both views.

// Host page
pub const MOUNT_ROOT_ID: &str = "app-root";

// Content hydration
pub const CONTENT_URL: &str = "/data/file.json";
pub const DEFAULT_TITLE: &str = "ANTIGRAVITY";
pub const DEFAULT_DESCRIPTION: &str = "Redefining the digital frontier with immersive experiences.";

// Pointer normalization: raw offset is multiplied by this per view
pub const LANDING_OFFSET_SCALE: f32 = 1.0; // offsets in [-0.5, 0.5]
pub const WIDGET_OFFSET_SCALE: f32 = 2.0; // offsets in [-1, 1]

// Landing mapping (degrees / percent per unit offset)
pub const LANDING_TILT_DEG: f32 = 20.0;
pub const LANDING_GRADIENT_SPAN_PCT: f32 = 20.0;
pub const LANDING_GRADIENT_CENTER_PCT: f32 = 50.0;
pub const LANDING_PULSE_SCALE: f32 = 0.95;

// Click pulse window
pub const PULSE_DURATION_MS: i32 = 500;

// Widget mapping
pub const WIDGET_TILT_DEG: f32 = 15.0;
pub const RING_COUNT: usize = 3;
pub const RING_BASE_DIAMETER_PX: f32 = 180.0;
pub const RING_DIAMETER_STEP_PX: f32 = 60.0;
pub const RING_TILT_X_STEP_DEG: f32 = 45.0;
pub const RING_TILT_Y_STEP_DEG: f32 = 30.0;
pub const RING_SPIN_BASE_SEC: f32 = 10.0;
pub const RING_SPIN_STEP_SEC: f32 = 5.0;
pub const SATELLITE_LIFT_PX: f32 = 50.0; // translateZ toward the viewer

/// Satellite card placed around the widget core.
#[derive(Clone, Copy, Debug)]
pub struct Satellite {
    pub glyph: &'static str,
    pub label: &'static str,
    pub anchor: Vec2, // px offset from the core center
    pub accent: &'static str,
}

pub const SATELLITES: [Satellite; 3] = [
    Satellite {
        glyph: "\u{2699}",
        label: "Processing",
        anchor: Vec2::new(-120.0, -80.0),
        accent: "amber",
    },
    Satellite {
        glyph: "\u{1F4F6}",
        label: "Uplink",
        anchor: Vec2::new(120.0, -80.0),
        accent: "emerald",
    },
    Satellite {
        glyph: "\u{1F5C4}",
        label: "Storage",
        anchor: Vec2::new(0.0, 140.0),
        accent: "purple",
    },
];

pub const SATELLITE_ACTIVE_LABEL: &str = "Active";
pub const SATELLITE_STANDBY_LABEL: &str = "Standby";
pub const HUD_STATUS: &str = "STATUS: ONLINE";
pub const BACK_LABEL: &str = "Return to Base";

/// Card shown in the landing feature grid.
#[derive(Clone, Copy, Debug)]
pub struct FeatureCard {
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        glyph: "\u{26A1}",
        title: "Lightning Fast",
        desc: "Optimized for extreme performance",
    },
    FeatureCard {
        glyph: "\u{1F310}",
        title: "Global Scale",
        desc: "Deployed to the edge worldwide",
    },
    FeatureCard {
        glyph: "\u{1F6E1}",
        title: "Secure Core",
        desc: "Enterprise-grade protection built-in",
    },
];

pub const LOGO_SRC: &str = "/vite.svg";
pub const LOGO_ALT: &str = "Antigravity Corp";
pub const LOGO_CAPTION: &str = "Click to Initialize";
