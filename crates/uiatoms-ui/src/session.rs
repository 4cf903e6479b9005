use uiatoms_engine::coords::{Rect, Vec2};
use uiatoms_engine::trap::{Renderer, ShaderHandle, Traps};
use uiatoms_engine::time::{FrameClock, FrameTime};

use crate::bounds::{clamp_to_range, point_in_rect};
use crate::command::{self, CommandHandlers};
use crate::config::UiConfig;
use crate::error::UiError;
use crate::painter::Painter;
use crate::transform::ViewportTransform;

/// Per-module UI state: video mapping, cursor and frame timing.
///
/// Created by [`UiSession::init`] when the engine loads the UI module and
/// consumed by [`UiSession::shutdown`]. Trap ports are passed into each call
/// rather than stored, so the session can be driven by any host.
#[derive(Debug)]
pub struct UiSession {
    config: UiConfig,
    transform: ViewportTransform,
    white_shader: ShaderHandle,
    /// Cursor in virtual coordinates, kept inside the canvas.
    cursor: Vec2,
    clock: FrameClock,
    frame: FrameTime,
}

impl UiSession {
    /// Reads the video config and registers the white shader.
    pub fn init<R: Renderer + ?Sized>(config: UiConfig, renderer: &mut R) -> Result<Self, UiError> {
        let transform = Self::transform_for(&config, &*renderer)?;
        let white_shader = renderer.register_shader_nomip(&config.white_shader);
        if !white_shader.is_valid() {
            log::warn!("white shader {:?} did not register; flat fills will be untextured", config.white_shader);
        }

        log::info!(
            "ui session up: scale {:.3}x{:.3}, aspect {:.4}",
            transform.xscale,
            transform.yscale,
            transform.current_aspect
        );

        Ok(Self {
            config,
            transform,
            white_shader,
            cursor: Vec2::zero(),
            clock: FrameClock::new(),
            frame: FrameTime::default(),
        })
    }

    pub fn shutdown(self) {
        log::info!("ui session down after {} console frames", self.frame.frame_index);
    }

    /// Re-reads the video config, e.g. after a video restart.
    pub fn refresh_video<R: Renderer + ?Sized>(&mut self, renderer: &R) -> Result<(), UiError> {
        self.transform = Self::transform_for(&self.config, renderer)?;
        log::debug!("ui video refreshed: {:?}", self.transform);
        Ok(())
    }

    fn transform_for<R: Renderer + ?Sized>(
        config: &UiConfig,
        renderer: &R,
    ) -> Result<ViewportTransform, UiError> {
        let gl = renderer.gl_config();
        let transform = ViewportTransform::from_gl_config(&gl, config.virtual_size, config.reference_aspect);
        if !transform.is_valid() {
            return Err(UiError::InvalidVideoConfig {
                width: gl.vid_width,
                height: gl.vid_height,
                aspect: gl.window_aspect,
            });
        }
        Ok(transform)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[inline]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    #[inline]
    pub fn white_shader(&self) -> ShaderHandle {
        self.white_shader
    }

    /// Timing of the most recent console frame.
    #[inline]
    pub fn frame(&self) -> FrameTime {
        self.frame
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Painter bound to `renderer` with this session's mapping.
    pub fn painter<'a, R: Renderer + ?Sized>(&self, renderer: &'a mut R) -> Painter<'a, R> {
        Painter::new(renderer, self.transform, self.white_shader)
            .with_big_char(self.config.big_char_width, self.config.big_char_height)
    }

    // ── cursor ────────────────────────────────────────────────────────────

    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Moves the cursor, clamped to the virtual canvas.
    pub fn set_cursor(&mut self, pos: Vec2) {
        let size = self.config.virtual_size;
        self.cursor = Vec2::new(
            clamp_to_range(pos.x, 0.0, size.width),
            clamp_to_range(pos.y, 0.0, size.height),
        );
    }

    /// Applies a relative mouse motion.
    pub fn move_cursor(&mut self, delta: Vec2) {
        self.set_cursor(self.cursor + delta);
    }

    /// True when the cursor lies in `rect` (edges included).
    #[inline]
    pub fn cursor_in_rect(&self, rect: Rect) -> bool {
        point_in_rect(self.cursor.x, self.cursor.y, rect)
    }

    // ── console ───────────────────────────────────────────────────────────

    /// Engine entry point for console commands.
    ///
    /// Advances frame timing to `real_time` (milliseconds), then offers the
    /// current command to [`command::dispatch`]. Returns `true` when the UI
    /// claimed the command.
    pub fn console_command<T, H>(&mut self, real_time: i32, traps: &T, handlers: &mut H) -> bool
    where
        T: Traps + ?Sized,
        H: CommandHandlers + ?Sized,
    {
        self.frame = self.clock.tick(real_time);
        command::dispatch(traps, handlers)
    }
}
