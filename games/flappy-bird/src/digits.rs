//! Score shown as a row of digit sprites.

use flap_engine::{EngineContext, Entity, EntityId, SpriteRegistry};
use glam::Vec2;

pub const GLYPH_TAG: &str = "score-digit";
const GLYPH_Z: f32 = 10.0;

/// One digit's sprite name, size and horizontal offset from the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: String,
    pub offset_x: f32,
    pub size: Vec2,
}

/// Lay out the decimal digits of `score` left to right with no gap, centred
/// on the anchor. Glyph sizes are the registry's native sizes times `scale`.
pub fn layout(score: u32, assets: &SpriteRegistry, scale: f32) -> Vec<Glyph> {
    let mut glyphs: Vec<Glyph> = score
        .to_string()
        .chars()
        .map(|c| {
            let name = c.to_string();
            let size = assets.resolve(&name).size * scale;
            Glyph { name, offset_x: 0.0, size }
        })
        .collect();

    let total: f32 = glyphs.iter().map(|g| g.size.x).sum();
    let mut left = -total / 2.0;
    for glyph in &mut glyphs {
        glyph.offset_x = left + glyph.size.x / 2.0;
        left += glyph.size.x;
    }
    glyphs
}

/// The HUD score: an anchor entity plus its current glyph entities.
#[derive(Debug, Clone)]
pub struct DigitDisplay {
    anchor: EntityId,
    glyphs: Vec<EntityId>,
    scale: f32,
    visible: bool,
}

impl DigitDisplay {
    /// Spawn the anchor at `pos`, pinned to the camera and initially hidden.
    pub fn spawn(ctx: &mut EngineContext, pos: Vec2, scale: f32) -> Self {
        let anchor = ctx.next_id();
        ctx.scene.spawn(Entity::new(anchor).with_tag("score-label").with_pos(pos).pinned());
        Self {
            anchor,
            glyphs: Vec::new(),
            scale,
            visible: false,
        }
    }

    /// Replace the glyphs with ones spelling `score`.
    pub fn rebuild(&mut self, ctx: &mut EngineContext, score: u32) {
        for id in self.glyphs.drain(..) {
            ctx.despawn(id);
        }
        let Some(origin) = ctx.scene.get(self.anchor).map(|e| e.pos) else {
            return;
        };

        let alpha = if self.visible { 1.0 } else { 0.0 };
        for glyph in layout(score, &ctx.assets, self.scale) {
            let sprite = ctx.assets.resolve(&glyph.name).sprite.with_z(GLYPH_Z).with_alpha(alpha);
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(GLYPH_TAG)
                    .with_pos(origin + Vec2::new(glyph.offset_x, 0.0))
                    .with_scale(glyph.size)
                    .with_sprite(sprite)
                    .pinned(),
            );
            self.glyphs.push(id);
        }
    }

    pub fn set_visible(&mut self, ctx: &mut EngineContext, visible: bool) {
        self.visible = visible;
        let alpha = if visible { 1.0 } else { 0.0 };
        for id in &self.glyphs {
            if let Some(sprite) = ctx.scene.get_mut(*id).and_then(|e| e.sprite.as_mut()) {
                sprite.alpha = alpha;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn glyphs(&self) -> &[EntityId] {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flap_engine::AssetManifest;
    use flap_engine::assets::registry::PLACEHOLDER_SIZE;

    fn digits() -> SpriteRegistry {
        let json = r#"{
            "atlases": [ { "name": "flappy", "cols": 16, "rows": 4, "path": "flappy.png" } ],
            "sprites": {
                "1": { "atlas": 0, "col": 1, "row": 0, "size": [16, 36] },
                "2": { "atlas": 0, "col": 2, "row": 0, "size": [24, 36] },
                "3": { "atlas": 0, "col": 3, "row": 0, "size": [24, 36] }
            }
        }"#;
        SpriteRegistry::from_manifest(&AssetManifest::from_json(json).unwrap())
    }

    #[test]
    fn single_digit_is_centred() {
        let glyphs = layout(2, &digits(), 0.5);
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].offset_x, 0.0);
        assert_eq!(glyphs[0].size, Vec2::new(12.0, 18.0));
    }

    #[test]
    fn glyphs_abut_and_centre_as_a_group() {
        let glyphs = layout(123, &digits(), 0.5);
        let names: Vec<&str> = glyphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3"]);

        // widths 8 + 12 + 12 = 32, so the row spans [-16, 16]
        assert_eq!(glyphs[0].offset_x, -12.0);
        assert_eq!(glyphs[1].offset_x, -2.0);
        assert_eq!(glyphs[2].offset_x, 10.0);
        let right = glyphs[2].offset_x + glyphs[2].size.x / 2.0;
        assert_eq!(right, 16.0);
    }

    #[test]
    fn missing_glyph_uses_placeholder_width() {
        let glyphs = layout(9, &digits(), 0.5);
        assert_eq!(glyphs[0].size, PLACEHOLDER_SIZE * 0.5);
    }

    #[test]
    fn rebuild_replaces_glyphs_and_keeps_visibility() {
        let mut ctx = EngineContext::new();
        ctx.assets = digits();
        let mut display = DigitDisplay::spawn(&mut ctx, Vec2::new(195.0, 744.0), 0.5);

        display.rebuild(&mut ctx, 0);
        assert_eq!(ctx.scene.count_tag(GLYPH_TAG), 1);
        let hidden = ctx.scene.get(display.glyphs()[0]).unwrap();
        assert_eq!(hidden.sprite.as_ref().unwrap().alpha, 0.0);

        display.set_visible(&mut ctx, true);
        display.rebuild(&mut ctx, 1_000_123);
        assert_eq!(ctx.scene.count_tag(GLYPH_TAG), 7);
        assert!(display
            .glyphs()
            .iter()
            .all(|id| ctx.scene.get(*id).unwrap().sprite.as_ref().unwrap().alpha == 1.0));
        assert!(ctx.scene.get(display.glyphs()[0]).unwrap().pinned);
    }
}
