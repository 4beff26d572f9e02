//! The backdrop: one field, one surface, one frame buffer
//!
//! `Backdrop` is what the host drives: it owns the surface dimensions, the
//! entity field, and the frame buffer, and runs one update+draw pass per
//! scheduler tick. The field is generated when the surface first attaches
//! and regenerated wholesale on a remount; the entity count never changes
//! in between.

use crate::draw::{draw_flyer, draw_links, draw_mote, draw_star};
use crate::palette::{Palette, Theme};
use crate::surface::{Frame, Surface};
use vesper_field::{proximity_links, wing_phase, BackdropConfig, Field, FieldKind, FieldRng};
use vesper_runtime::{FrameClock, FramePass};

pub struct Backdrop {
    kind: FieldKind,
    palette: Palette,
    config: BackdropConfig,
    surface: Surface,
    frame: Frame,
    field: Option<Field>,
    rng: FieldRng,
}

impl Backdrop {
    pub fn new(kind: FieldKind, theme: Theme, config: BackdropConfig, seed: u32) -> Self {
        Self {
            kind,
            palette: Palette::for_theme(theme),
            config,
            surface: Surface::new(),
            frame: Frame::new(0, 0),
            field: None,
            rng: FieldRng::new(seed),
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// The full-height frame buffer, for presentation
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Entity count of the active field, zero before first attach
    pub fn field_len(&self) -> usize {
        self.field.as_ref().map_or(0, Field::len)
    }

    /// Resize to the viewport width and full content height. Entities keep
    /// their coordinates; out-of-bound ones recover through wrap-around on
    /// their next update. The field is generated on the first attaching
    /// resize.
    pub fn resize(&mut self, viewport_width: u32, content_height: u32) {
        self.surface.resize(viewport_width, content_height);
        if !self.surface.is_attached() {
            return;
        }
        self.frame.resize_to(self.surface);
        if self.field.is_none() {
            self.regenerate();
        }
    }

    /// Throw away the current field and generate a fresh one over the
    /// current surface, as on a view remount
    pub fn regenerate(&mut self) {
        if !self.surface.is_attached() {
            return;
        }
        self.field = Some(Field::generate(
            self.kind,
            &mut self.rng,
            self.surface.width as f32,
            self.surface.height as f32,
            &self.config,
        ));
    }
}

impl FramePass for Backdrop {
    fn ready(&self) -> bool {
        self.surface.is_attached()
    }

    fn frame(&mut self, clock: &FrameClock, pointer: Option<vesper_core::Vec2>) -> bool {
        let width = self.surface.width as f32;
        let height = self.surface.height as f32;
        // Zero-width guard: skip the whole frame rather than let the flyer
        // normalization produce NaN positions that poison every later frame.
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        let Some(field) = self.field.as_mut() else {
            return false;
        };

        field.update(pointer, width, height, &self.config, &mut self.rng);

        match field {
            Field::Stars(stars) => {
                self.frame.clear(self.palette.base);
                for star in stars.iter() {
                    draw_star(&mut self.frame, star, &self.palette);
                }
            }
            Field::Motes(motes) => {
                self.frame.clear(self.palette.base);
                for mote in motes.iter() {
                    draw_mote(&mut self.frame, mote, &self.palette);
                }
                let links = proximity_links(motes, &self.config.links);
                draw_links(
                    &mut self.frame,
                    motes,
                    &links,
                    self.config.links.line_width,
                    &self.palette,
                );
            }
            Field::Flyer(flyer) => {
                let background = self.palette.flyer_background(flyer.progress(width));
                self.frame.clear(background);
                let wing = wing_phase(clock.total_time, &self.config.flyer);
                draw_flyer(
                    &mut self.frame,
                    flyer,
                    width,
                    wing,
                    &self.config.flyer,
                    &self.palette,
                );
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vesper_core::Vec2;
    use vesper_runtime::Scheduler;

    fn backdrop(kind: FieldKind) -> Backdrop {
        Backdrop::new(kind, Theme::Dark, BackdropConfig::default(), 42)
    }

    #[test]
    fn not_ready_before_attach() {
        let bd = backdrop(FieldKind::Stars);
        assert!(!bd.ready());
        assert_eq!(bd.field_len(), 0);
    }

    #[test]
    fn field_generated_on_first_attach() {
        let mut bd = backdrop(FieldKind::Stars);
        bd.resize(800, 600);
        assert!(bd.ready());
        assert_eq!(bd.field_len(), 50);
    }

    #[test]
    fn resize_does_not_regenerate() {
        let mut bd = backdrop(FieldKind::Motes);
        bd.resize(800, 600);
        let before: Vec<Vec2> = match bd.field.as_ref().unwrap() {
            Field::Motes(motes) => motes.iter().map(|m| m.pos).collect(),
            _ => unreachable!(),
        };
        bd.resize(400, 300);
        let after: Vec<Vec2> = match bd.field.as_ref().unwrap() {
            Field::Motes(motes) => motes.iter().map(|m| m.pos).collect(),
            _ => unreachable!(),
        };
        assert_eq!(before, after);
    }

    #[test]
    fn regenerate_replaces_the_field() {
        let mut bd = backdrop(FieldKind::Motes);
        bd.resize(800, 600);
        let before: Vec<Vec2> = match bd.field.as_ref().unwrap() {
            Field::Motes(motes) => motes.iter().map(|m| m.pos).collect(),
            _ => unreachable!(),
        };
        bd.regenerate();
        let after: Vec<Vec2> = match bd.field.as_ref().unwrap() {
            Field::Motes(motes) => motes.iter().map(|m| m.pos).collect(),
            _ => unreachable!(),
        };
        assert_eq!(after.len(), 150);
        assert_ne!(before, after);
    }

    #[test]
    fn full_pass_through_the_scheduler() {
        let mut bd = backdrop(FieldKind::Stars);
        bd.resize(320, 240);
        let mut scheduler = Scheduler::new();
        assert!(scheduler.start(&bd));
        for _ in 0..30 {
            assert!(scheduler.tick(&mut bd, Some(Vec2::new(100.0, 100.0))));
        }
        assert_eq!(scheduler.frames_run(), 30);
        assert_eq!(bd.field_len(), 50);
        // Something was painted over the base clear
        let base = bd.palette().base.to_rgba8();
        let any_lit = (0..240).any(|y| {
            (0..320).any(|x| {
                let px = bd.frame().pixel(x, y).unwrap();
                px[0] > base[0]
            })
        });
        assert!(any_lit);
    }

    #[test]
    fn scheduler_refuses_detached_backdrop() {
        let bd = backdrop(FieldKind::Flyer);
        let mut scheduler = Scheduler::new();
        assert!(!scheduler.start(&bd));
        assert!(!scheduler.is_running());
    }

    #[test]
    fn shrink_then_frame_does_not_crash() {
        let mut bd = backdrop(FieldKind::Motes);
        bd.resize(800, 600);
        let mut scheduler = Scheduler::new();
        scheduler.start(&bd);
        scheduler.tick(&mut bd, None);
        bd.resize(400, 300);
        // Entities may sit outside the new bounds; the next frames must
        // recover them through wrap-around, not panic.
        for _ in 0..10 {
            assert!(scheduler.tick(&mut bd, None));
        }
        assert_eq!(bd.field_len(), 150);
    }

    #[test]
    fn flyer_background_tracks_position() {
        let mut bd = backdrop(FieldKind::Flyer);
        bd.resize(800, 600);
        let mut scheduler = Scheduler::new();
        scheduler.start(&bd);
        scheduler.tick(&mut bd, None);
        // Corner pixel carries the ramp color for the flyer's progress
        let flyer_progress = match bd.field.as_ref().unwrap() {
            Field::Flyer(flyer) => flyer.progress(800.0),
            _ => unreachable!(),
        };
        let expected = bd.palette().flyer_background(flyer_progress).to_rgba8();
        assert_eq!(bd.frame().pixel(0, 0), Some(expected));
    }

    #[test]
    fn stop_start_cycle_keeps_single_loop() {
        let mut bd = backdrop(FieldKind::Stars);
        bd.resize(320, 240);
        let mut scheduler = Scheduler::new();
        assert!(scheduler.start(&bd));
        scheduler.tick(&mut bd, None);
        scheduler.stop();
        assert!(scheduler.start(&bd));
        scheduler.tick(&mut bd, None);
        assert_eq!(scheduler.frames_run(), 2);
    }
}
