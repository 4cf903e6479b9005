//! Headless engine.
//!
//! Implements every trap port without a window or GPU: renderer calls are
//! recorded into a [`DrawList`], console output is kept in memory, and
//! console variables live in a map. Used by the test suites and by the demo
//! host.

mod config;
mod tokenize;

pub use config::HeadlessConfig;

use std::collections::HashMap;

use crate::coords::{ColorRgba, Rect};
use crate::scene::{DrawCmd, DrawList};
use crate::trap::{
    Client, ClientState, ConnState, Console, GlConfig, Renderer, ShaderHandle, UvRect,
};

/// Recording implementation of [`crate::trap::Traps`].
#[derive(Debug)]
pub struct HeadlessEngine {
    gl_config: GlConfig,
    draw_list: DrawList,
    /// Registered shader names; handle `n` is `shaders[n - 1]`.
    shaders: Vec<String>,
    cvars: HashMap<String, String>,
    args: Vec<String>,
    printed: Vec<String>,
    errors: Vec<String>,
    client: ClientState,
    frames_presented: u32,
}

impl HeadlessEngine {
    pub fn new(config: HeadlessConfig) -> Self {
        let mut cvars = HashMap::new();
        if config.developer {
            cvars.insert("developer".to_string(), "1".to_string());
        }

        log::debug!(
            "headless engine: {}x{} aspect {:.4}",
            config.vid_width,
            config.vid_height,
            config.gl_config().window_aspect
        );

        Self {
            gl_config: config.gl_config(),
            draw_list: DrawList::new(),
            shaders: Vec::new(),
            cvars,
            args: Vec::new(),
            printed: Vec::new(),
            errors: Vec::new(),
            client: ClientState { conn_state: config.conn_state },
            frames_presented: 0,
        }
    }

    // ── inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Drops recorded renderer calls, e.g. between frames.
    #[inline]
    pub fn clear_draws(&mut self) {
        self.draw_list.clear();
    }

    /// Name a handle was registered under, if any.
    pub fn shader_name(&self, handle: ShaderHandle) -> Option<&str> {
        let index = usize::try_from(handle.0).ok()?.checked_sub(1)?;
        self.shaders.get(index).map(String::as_str)
    }

    /// Console prints, oldest first.
    #[inline]
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// Error reports, oldest first.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[inline]
    pub fn frames_presented(&self) -> u32 {
        self.frames_presented
    }

    // ── host-side control ─────────────────────────────────────────────────

    /// Sets the command line that `argc` / `argv` report.
    pub fn set_command(&mut self, line: &str) {
        self.args = tokenize::tokenize(line);
    }

    pub fn set_cvar(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.cvars.insert(name.into(), value.into());
    }

    pub fn set_conn_state(&mut self, state: ConnState) {
        self.client.conn_state = state;
    }

    /// Simulates a video restart.
    pub fn set_gl_config(&mut self, config: GlConfig) {
        self.gl_config = config;
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new(HeadlessConfig::default())
    }
}

impl Renderer for HeadlessEngine {
    fn register_shader_nomip(&mut self, name: &str) -> ShaderHandle {
        if name.is_empty() {
            log::warn!("register_shader_nomip: empty shader name");
            return ShaderHandle::INVALID;
        }

        let existing = self.shaders.iter().position(|s| s.eq_ignore_ascii_case(name));
        let index = match existing {
            Some(i) => i,
            None => {
                self.shaders.push(name.to_string());
                self.shaders.len() - 1
            }
        };

        ShaderHandle(i32::try_from(index + 1).unwrap_or(0))
    }

    fn draw_stretch_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle) {
        self.draw_list.push_stretch_pic(quad, uv, shader);
    }

    fn draw_rotated_pic(&mut self, quad: Rect, uv: UvRect, shader: ShaderHandle, angle: f32) {
        self.draw_list.push_rotated_pic(quad, uv, shader, angle);
    }

    fn set_color(&mut self, color: Option<ColorRgba>) {
        self.draw_list.push(DrawCmd::SetColor(color));
    }

    fn update_screen(&mut self) {
        self.frames_presented = self.frames_presented.wrapping_add(1);
        self.draw_list.push(DrawCmd::UpdateScreen);
    }

    fn gl_config(&self) -> GlConfig {
        self.gl_config
    }
}

impl Console for HeadlessEngine {
    fn print(&mut self, msg: &str) {
        self.printed.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn argc(&self) -> usize {
        self.args.len()
    }

    fn argv(&self, n: usize) -> String {
        self.args.get(n).cloned().unwrap_or_default()
    }

    fn cvar_value(&self, name: &str) -> f32 {
        self.cvars
            .get(name)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0)
    }

    fn cvar_string(&self, name: &str) -> String {
        self.cvars.get(name).cloned().unwrap_or_default()
    }
}

impl Client for HeadlessEngine {
    fn client_state(&self) -> ClientState {
        self.client
    }
}
