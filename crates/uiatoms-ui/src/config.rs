use uiatoms_engine::coords::Viewport;

use crate::transform::REFERENCE_ASPECT;

/// UI adapter configuration.
///
/// Defaults match the stock menu assets: a 640×480 virtual canvas, a 4:3
/// reference aspect, 16×16 big-char cells and a shader named `white`.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Canvas menu layouts are authored in.
    pub virtual_size: Viewport,
    /// Aspect at which no horizontal correction is applied.
    pub reference_aspect: f32,
    /// Big-char cell width in virtual units; text boxes are sized in cells.
    pub big_char_width: i32,
    pub big_char_height: i32,
    /// Name of the 1×1 opaque white texture used for flat fills.
    pub white_shader: String,
}

impl UiConfig {
    pub fn virtual_size(mut self, width: f32, height: f32) -> Self {
        self.virtual_size = Viewport::new(width, height);
        self
    }

    pub fn reference_aspect(mut self, aspect: f32) -> Self {
        self.reference_aspect = aspect;
        self
    }

    pub fn big_char(mut self, width: i32, height: i32) -> Self {
        self.big_char_width = width;
        self.big_char_height = height;
        self
    }

    pub fn white_shader(mut self, name: impl Into<String>) -> Self {
        self.white_shader = name.into();
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            virtual_size: Viewport::VIRTUAL,
            reference_aspect: REFERENCE_ASPECT,
            big_char_width: 16,
            big_char_height: 16,
            white_shader: "white".to_string(),
        }
    }
}
