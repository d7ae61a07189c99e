//! Sprite animation: a sequence of atlas cells shown for a fixed time each.

/// Frames and timing shared by every entity that plays the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Atlas cells as `(col, row)`.
    pub frames: Vec<(f32, f32)>,
    /// Seconds each frame stays on screen.
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationDef {
    pub fn from_frames(frames: Vec<(f32, f32)>, frame_duration: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration,
            looping,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Per-entity playback position.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationComponent {
    pub def: AnimationDef,
    pub frame_index: usize,
    /// Time spent on the current frame.
    pub elapsed: f32,
    pub playing: bool,
}

impl AnimationComponent {
    pub fn new(def: AnimationDef) -> Self {
        Self {
            def,
            frame_index: 0,
            elapsed: 0.0,
            playing: true,
        }
    }

    /// Hold the current frame until the entity is rebuilt.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn current_frame(&self) -> Option<(f32, f32)> {
        self.def.frames.get(self.frame_index).copied()
    }

    /// Advance by `dt`. A long `dt` may skip several frames. A one-shot
    /// animation stops on its last frame. Returns whether the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let count = self.def.frames.len();
        if !self.playing || count == 0 || self.def.frame_duration <= 0.0 {
            return false;
        }

        self.elapsed += dt;
        let before = self.frame_index;
        while self.elapsed >= self.def.frame_duration {
            self.elapsed -= self.def.frame_duration;
            if self.frame_index + 1 < count {
                self.frame_index += 1;
            } else if self.def.looping {
                self.frame_index = 0;
            } else {
                self.playing = false;
                self.elapsed = 0.0;
                break;
            }
        }
        self.frame_index != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wings() -> AnimationDef {
        AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (2.0, 0.0)], 0.1, true)
    }

    #[test]
    fn loops_back_to_first_frame() {
        let mut anim = AnimationComponent::new(wings());
        assert_eq!(anim.current_frame(), Some((0.0, 0.0)));

        assert!(anim.tick(0.15));
        assert_eq!(anim.current_frame(), Some((1.0, 0.0)));

        anim.tick(0.3);
        assert_eq!(anim.frame_index, 0);
        assert!(anim.playing);
    }

    #[test]
    fn stop_holds_the_frame() {
        let mut anim = AnimationComponent::new(wings());
        anim.tick(0.15);
        anim.stop();
        assert!(!anim.tick(1.0));
        assert_eq!(anim.current_frame(), Some((1.0, 0.0)));
    }

    #[test]
    fn one_shot_ends_on_last_frame() {
        let def = AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)], 0.1, false);
        let mut anim = AnimationComponent::new(def);
        anim.tick(0.35);
        assert!(!anim.playing);
        assert_eq!(anim.frame_index, 2);
    }

    #[test]
    fn empty_or_zero_duration_never_advances() {
        let mut empty = AnimationComponent::new(AnimationDef::from_frames(Vec::new(), 0.1, true));
        assert!(!empty.tick(1.0));
        assert_eq!(empty.current_frame(), None);

        let mut frozen = AnimationComponent::new(AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0)], 0.0, true));
        assert!(!frozen.tick(1.0));
    }
}
