use crate::trap::{ConnState, GlConfig};

/// Headless engine configuration.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    pub vid_width: u32,
    pub vid_height: u32,
    /// Overrides the aspect derived from the pixel size.
    pub window_aspect: Option<f32>,
    /// Sets the `developer` cvar to 1.
    pub developer: bool,
    pub conn_state: ConnState,
}

impl HeadlessConfig {
    pub fn size(mut self, vid_width: u32, vid_height: u32) -> Self {
        self.vid_width = vid_width;
        self.vid_height = vid_height;
        self
    }

    pub fn window_aspect(mut self, aspect: f32) -> Self {
        self.window_aspect = Some(aspect);
        self
    }

    pub fn developer(mut self, developer: bool) -> Self {
        self.developer = developer;
        self
    }

    pub fn conn_state(mut self, state: ConnState) -> Self {
        self.conn_state = state;
        self
    }

    pub fn gl_config(&self) -> GlConfig {
        let mut cfg = GlConfig::from_size(self.vid_width, self.vid_height);
        if let Some(aspect) = self.window_aspect {
            cfg.window_aspect = aspect;
        }
        cfg
    }
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            vid_width: 640,
            vid_height: 480,
            window_aspect: None,
            developer: false,
            conn_state: ConnState::Disconnected,
        }
    }
}
