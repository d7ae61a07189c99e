use glam::Vec2;

/// World-space rectangle currently visible through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl ViewRect {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn mid_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        (self.min_y + self.max_y) / 2.0
    }
}

/// Orthographic 2D camera. Y-up; `center` is the middle of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
}

impl Camera2D {
    /// Camera covering `[0, width] x [0, height]`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Move the camera center to `target`.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
    }

    /// Shift the camera by `delta` world units.
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Return to the initial framing of `[0, width] x [0, height]`.
    pub fn reset(&mut self) {
        self.center = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    /// The world-space rectangle currently in view.
    pub fn rect(&self) -> ViewRect {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        ViewRect {
            min_x: self.center.x - half_w,
            min_y: self.center.y - half_h,
            max_x: self.center.x + half_w,
            max_y: self.center.y + half_h,
        }
    }

    /// Check if a world-space point is visible in the viewport.
    pub fn is_visible(&self, point: Vec2) -> bool {
        let r = self.rect();
        point.x >= r.min_x && point.x <= r.max_x && point.y >= r.min_y && point.y <= r.max_y
    }
}
