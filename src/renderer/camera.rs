//! Dead-zone follow camera

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::settings::DisplaySettings;

/// World-to-screen offset that only moves when the target leaves the
/// central dead zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    offset: DVec2,
    /// Dead-zone margins as fractions of the viewport (x, y)
    margins: DVec2,
}

impl Camera {
    pub fn new(margins: DVec2) -> Self {
        Self {
            offset: DVec2::ZERO,
            margins,
        }
    }

    pub fn from_settings(display: &DisplaySettings) -> Self {
        Self::new(DVec2::new(display.camera_margin_x, display.camera_margin_y))
    }

    /// Current offset; subtract from world positions to get screen positions
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Shift just enough to bring `target` back inside the dead zone
    pub fn follow(&mut self, target: DVec2, viewport: DVec2) {
        let screen = target - self.offset;
        let low = self.margins * viewport;
        let high = (DVec2::ONE - self.margins) * viewport;

        if screen.x > high.x {
            self.offset.x += screen.x - high.x;
        } else if screen.x < low.x {
            self.offset.x += screen.x - low.x;
        }

        if screen.y < low.y {
            self.offset.y += screen.y - low.y;
        } else if screen.y > high.y {
            self.offset.y += screen.y - high.y;
        }
    }
}
