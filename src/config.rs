use crate::system::UpdateOrder;
use crate::{Float, AU, SCREEN_DIMS};

/// Fonts tried in order for the distance labels. Labels are left out if none load.
const FONT_CANDIDATES: &[&str] = &[
    "resources/FiraSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Run-time knobs. Only ever built from `Default`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: &'static str,
    pub window_size: [u32; 2],
    pub frames_per_second: u64,
    pub samples: u8,
    pub update_order: UpdateOrder,
    pub asteroid_count: usize,
    pub asteroid_band: (Float, Float),    // Metres from the origin
    pub label_size: u32,
    pub show_labels: bool,
    pub show_clock: bool,
    pub font_candidates: &'static [&'static str],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Planet Simulation",
            window_size: [SCREEN_DIMS.0 as u32, SCREEN_DIMS.1 as u32],
            frames_per_second: 60,
            samples: 4,
            update_order: UpdateOrder::Snapshot,
            asteroid_count: 400,
            asteroid_band: (1.8 * AU, 2.5 * AU),
            label_size: 12,
            show_labels: true,
            show_clock: true,
            font_candidates: FONT_CANDIDATES,
        }
    }
}
