//! Frame sequencing
//!
//! Steps the rotation angle through one animation and renders + dithers each
//! frame. Timing is not handled here: callers either iterate the sequencer
//! themselves or hand [`play`] a [`Pacing`] hook.

use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::rasterizer::{render_frame, Bitmap, Framebuffer, RenderSettings, Surface};

/// One rendered animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub index: usize,
    pub angle: f32,
    pub framebuffer: Framebuffer,
    pub bitmap: Bitmap,
}

/// Yields `frame_count` frames; the angle is advanced before each render,
/// so frame k is drawn at (k + 1) * pi / frame_count.
pub struct FrameSequencer<'a, S: Surface + ?Sized> {
    settings: &'a RenderSettings,
    surface: &'a S,
    angle: f32,
    next_index: usize,
}

impl<'a, S: Surface + ?Sized> FrameSequencer<'a, S> {
    pub fn new(settings: &'a RenderSettings, surface: &'a S) -> Self {
        Self {
            settings,
            surface,
            angle: 0.0,
            next_index: 0,
        }
    }
}

impl<'a, S: Surface + ?Sized> Iterator for FrameSequencer<'a, S> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next_index >= self.settings.frame_count {
            return None;
        }

        self.angle += self.settings.angle_step();
        let framebuffer = render_frame(self.angle, self.surface, self.settings);
        let bitmap = Bitmap::from_framebuffer(&framebuffer);

        let covered = framebuffer.covered_count();
        if covered == 0 {
            warn!("frame {} at angle {:.4} covers no pixels", self.next_index, self.angle);
        }
        debug!(
            "frame {} angle {:.4}: {} covered, {} lit",
            self.next_index,
            self.angle,
            covered,
            bitmap.lit_count()
        );

        let frame = Frame {
            index: self.next_index,
            angle: self.angle,
            framebuffer,
            bitmap,
        };
        self.next_index += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.settings.frame_count.saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl<'a, S: Surface + ?Sized> ExactSizeIterator for FrameSequencer<'a, S> {}

/// Called once after each frame is presented
pub trait Pacing {
    fn wait(&mut self, frame: &Frame);
}

/// No delay between frames
impl Pacing for () {
    fn wait(&mut self, _frame: &Frame) {}
}

/// Sleep a fixed time between frames (live preview)
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacing for FixedDelay {
    fn wait(&mut self, _frame: &Frame) {
        thread::sleep(self.0);
    }
}

/// Run the whole animation, handing each frame to `present` then `pacing`
pub fn play<S, P, F, E>(settings: &RenderSettings, surface: &S, pacing: &mut P, mut present: F) -> Result<usize, E>
where
    S: Surface + ?Sized,
    P: Pacing,
    F: FnMut(&Frame) -> Result<(), E>,
{
    let mut shown = 0;
    for frame in FrameSequencer::new(settings, surface) {
        present(&frame)?;
        pacing.wait(&frame);
        shown += 1;
    }
    Ok(shown)
}
