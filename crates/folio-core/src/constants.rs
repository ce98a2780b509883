// Shared tuning constants for the background field, loader and panels.

// Particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 90;
pub const MAX_PARTICLE_COUNT: usize = 400; // pair checks grow as n^2 per frame
pub const LINK_DISTANCE: f32 = 120.0; // px; no link drawn at or beyond this
pub const MAX_SPEED: f32 = 0.25; // px/frame, per velocity component
pub const PARTICLE_RADIUS: f32 = 1.6; // px
pub const LINK_WIDTH: f64 = 0.5; // px

// Parallax
pub const PARALLAX_SMOOTHING: f32 = 0.02; // fraction of the gap closed per pointer move
pub const PARALLAX_DAMPING: f32 = 0.05; // smoothed offset -> render offset

// Fake load progress
pub const PROGRESS_TICK_MS: i32 = 250;
pub const PROGRESS_MAX_STEP: f32 = 8.0; // random increment in [0, max) per tick
pub const PROGRESS_FAKE_CAP: u32 = 90; // percent shown until the model reports ready
pub const FINISH_TICK_MS: i32 = 80;
pub const FINISH_STEP: u32 = 2; // percent per finishing tick
pub const LOAD_TIMEOUT_MS: i32 = 10_000;

// Loader reveal choreography (after the finishing animation starts)
pub const REVEAL_FADE_DELAY_MS: i32 = 300;
pub const REVEAL_REMOVE_DELAY_MS: i32 = 500;
pub const HINT_DELAY_MS: i32 = 800;

// Progress ring geometry
pub const RING_RADIUS: f64 = 50.0;

// Fullscreen panels
pub const PANEL_ACTIVATE_DELAY_MS: i32 = 10; // lets display:flex apply before the transition
pub const PANEL_HIDE_DELAY_MS: i32 = 400; // matches the CSS close transition

// Scroll thresholds (px)
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
pub const SCROLL_CUE_THRESHOLD: f64 = 120.0;
