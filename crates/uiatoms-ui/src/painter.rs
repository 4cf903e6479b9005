use uiatoms_engine::coords::{ColorRgba, Rect};
use uiatoms_engine::trap::{Renderer, ShaderHandle, UvRect};

use crate::transform::ViewportTransform;

/// Drawing surface for menu code.
///
/// Every method takes virtual (640×480) coordinates, converts them with the
/// painter's [`ViewportTransform`] and issues renderer trap calls. Nothing is
/// retained between calls.
///
/// Methods that tint (`fill_rect`, `draw_rect`, `draw_text_box`) set the
/// renderer's override color and always reset it before returning.
pub struct Painter<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    transform: ViewportTransform,
    white_shader: ShaderHandle,
    big_char_width: i32,
    big_char_height: i32,
}

impl<'a, R: Renderer + ?Sized> Painter<'a, R> {
    /// Painter with 16×16 big-char cells.
    pub fn new(renderer: &'a mut R, transform: ViewportTransform, white_shader: ShaderHandle) -> Self {
        Self { renderer, transform, white_shader, big_char_width: 16, big_char_height: 16 }
    }

    /// Overrides the big-char cell size used by [`draw_text_box`](Self::draw_text_box).
    pub fn with_big_char(mut self, width: i32, height: i32) -> Self {
        self.big_char_width = width;
        self.big_char_height = height;
        self
    }

    #[inline]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    // ── pictures ──────────────────────────────────────────────────────────

    /// Registers `name` and draws it over `rect`.
    pub fn draw_named_pic(&mut self, rect: Rect, name: &str) {
        let shader = self.renderer.register_shader_nomip(name);
        self.draw_pic(rect, shader);
    }

    /// Draws the whole of `shader` over `rect`.
    pub fn draw_pic(&mut self, rect: Rect, shader: ShaderHandle) {
        let quad = self.transform.adjust(rect);
        self.renderer.draw_stretch_pic(quad, UvRect::FULL, shader);
    }

    /// Like [`draw_pic`](Self::draw_pic), but a negative width mirrors the
    /// texture horizontally and a negative height mirrors it vertically.
    /// The quad itself keeps the absolute extents at the same origin.
    pub fn draw_handle_pic(&mut self, rect: Rect, shader: ShaderHandle) {
        let mut rect = rect;
        let mut uv = UvRect::FULL;

        if rect.size.x < 0.0 {
            rect.size.x = -rect.size.x;
            uv.s0 = 1.0;
            uv.s1 = 0.0;
        }
        if rect.size.y < 0.0 {
            rect.size.y = -rect.size.y;
            uv.t0 = 1.0;
            uv.t1 = 0.0;
        }

        let quad = self.transform.adjust(rect);
        self.renderer.draw_stretch_pic(quad, uv, shader);
    }

    /// Draws the whole of `shader` over `rect`, rotated by `angle` degrees.
    pub fn draw_rotated_pic(&mut self, rect: Rect, shader: ShaderHandle, angle: f32) {
        let quad = self.transform.adjust(rect);
        self.renderer.draw_rotated_pic(quad, UvRect::FULL, shader, angle);
    }

    // ── flat shapes ───────────────────────────────────────────────────────

    /// Solid rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: ColorRgba) {
        let quad = self.transform.adjust(rect);
        self.renderer.set_color(Some(color));
        self.white_quad(quad);
        self.renderer.set_color(None);
    }

    /// One-pixel outline of `rect`: four strips, one color change.
    pub fn draw_rect(&mut self, rect: Rect, color: ColorRgba) {
        self.renderer.set_color(Some(color));
        self.draw_top_bottom(rect);
        self.draw_sides(rect);
        self.renderer.set_color(None);
    }

    /// Left and right one-pixel strips inside `rect`, in the current color.
    pub fn draw_sides(&mut self, rect: Rect) {
        let r = self.transform.adjust(rect);
        let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
        self.white_quad(Rect::new(x, y, 1.0, h));
        self.white_quad(Rect::new(x + w - 1.0, y, 1.0, h));
    }

    /// Top and bottom one-pixel strips inside `rect`, in the current color.
    pub fn draw_top_bottom(&mut self, rect: Rect) {
        let r = self.transform.adjust(rect);
        let (x, y, w, h) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
        self.white_quad(Rect::new(x, y, w, 1.0));
        self.white_quad(Rect::new(x, y + h - 1.0, w, 1.0));
    }

    /// Black box with a white outline, sized in big-char cells.
    ///
    /// The box starts half a cell right of and below `(x, y)` and spans
    /// `width + 1` cells across and `lines + 1` cells down.
    pub fn draw_text_box(&mut self, x: i32, y: i32, width: i32, lines: i32) {
        let (cw, ch) = (self.big_char_width, self.big_char_height);
        let rect = Rect::new(
            (x + cw / 2) as f32,
            (y + ch / 2) as f32,
            ((width + 1) * cw) as f32,
            ((lines + 1) * ch) as f32,
        );

        self.fill_rect(rect, ColorRgba::black());
        self.draw_rect(rect, ColorRgba::white());
    }

    // ── renderer state ────────────────────────────────────────────────────

    /// Sets the override color directly. Callers own the reset.
    pub fn set_color(&mut self, color: Option<ColorRgba>) {
        self.renderer.set_color(color);
    }

    pub fn update_screen(&mut self) {
        self.renderer.update_screen();
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Device-space quad with the white shader; tinted by the current color.
    #[inline]
    fn white_quad(&mut self, quad: Rect) {
        self.renderer.draw_stretch_pic(quad, UvRect::ZERO, self.white_shader);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiatoms_engine::headless::{HeadlessConfig, HeadlessEngine};
    use uiatoms_engine::scene::DrawCmd;
    use uiatoms_engine::scene::shapes::StretchPicCmd;

    const WHITE: ShaderHandle = ShaderHandle(1);
    const PIC: ShaderHandle = ShaderHandle(7);

    fn quads(engine: &HeadlessEngine) -> Vec<StretchPicCmd> {
        engine.draw_list().stretch_pics().cloned().collect()
    }

    fn colors(engine: &HeadlessEngine) -> Vec<Option<ColorRgba>> {
        engine
            .draw_list()
            .items()
            .iter()
            .filter_map(|i| match i.cmd {
                DrawCmd::SetColor(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    // ── pictures ──────────────────────────────────────────────────────────

    #[test]
    fn draw_pic_uses_full_uvs_and_adjusted_quad() {
        let mut engine = HeadlessEngine::default();
        let t = ViewportTransform::new(2.0, 2.0, 4.0 / 3.0);
        Painter::new(&mut engine, t, WHITE).draw_pic(Rect::new(10.0, 10.0, 20.0, 5.0), PIC);

        let q = quads(&engine);
        assert_eq!(q.len(), 1);
        assert_eq!(q[0].quad, Rect::new(20.0, 20.0, 40.0, 10.0));
        assert_eq!(q[0].uv, UvRect::FULL);
        assert_eq!(q[0].shader, PIC);
    }

    #[test]
    fn named_pic_registers_then_draws() {
        let mut engine = HeadlessEngine::default();
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE)
            .draw_named_pic(Rect::new(0.0, 0.0, 64.0, 64.0), "ui/assets/logo");

        let q = quads(&engine);
        assert_eq!(q.len(), 1);
        assert_eq!(engine.shader_name(q[0].shader), Some("ui/assets/logo"));
    }

    #[test]
    fn negative_width_flips_horizontal_uvs_only() {
        let t = ViewportTransform::new(1.5, 1.5, 16.0 / 9.0);

        let mut plain = HeadlessEngine::default();
        Painter::new(&mut plain, t, WHITE).draw_handle_pic(Rect::new(40.0, 40.0, 32.0, 16.0), PIC);

        let mut flipped = HeadlessEngine::default();
        Painter::new(&mut flipped, t, WHITE).draw_handle_pic(Rect::new(40.0, 40.0, -32.0, 16.0), PIC);

        let (plain, flipped) = (quads(&plain), quads(&flipped));
        let (p, f) = (&plain[0], &flipped[0]);
        assert_eq!(p.quad, f.quad);
        assert_eq!(p.uv, UvRect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(f.uv, UvRect::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn negative_height_flips_vertical_uvs() {
        let mut engine = HeadlessEngine::default();
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE)
            .draw_handle_pic(Rect::new(0.0, 0.0, -8.0, -8.0), PIC);

        let q = quads(&engine).remove(0);
        assert_eq!(q.quad, Rect::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(q.uv, UvRect::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn rotated_pic_passes_angle_through() {
        let mut engine = HeadlessEngine::default();
        let t = ViewportTransform::new(2.0, 2.0, 4.0 / 3.0);
        Painter::new(&mut engine, t, WHITE).draw_rotated_pic(Rect::new(5.0, 5.0, 10.0, 10.0), PIC, 45.0);

        match &engine.draw_list().items()[0].cmd {
            DrawCmd::RotatedPic(c) => {
                assert_eq!(c.quad, Rect::new(10.0, 10.0, 20.0, 20.0));
                assert_eq!(c.uv, UvRect::FULL);
                assert_eq!(c.angle, 45.0);
            }
            other => panic!("expected rotated pic, got {other:?}"),
        }
    }

    // ── flat shapes ───────────────────────────────────────────────────────

    #[test]
    fn fill_rect_sets_and_resets_color_once() {
        let mut engine = HeadlessEngine::default();
        let red = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE)
            .fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0), red);

        let items = engine.draw_list().items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].cmd, DrawCmd::SetColor(Some(red)));
        assert_eq!(items[2].cmd, DrawCmd::SetColor(None));

        let q = quads(&engine).remove(0);
        assert_eq!(q.shader, WHITE);
        assert_eq!(q.uv, UvRect::ZERO);
    }

    #[test]
    fn draw_rect_is_four_strips_two_color_changes() {
        let mut engine = HeadlessEngine::default();
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE)
            .draw_rect(Rect::new(10.0, 20.0, 100.0, 50.0), ColorRgba::white());

        assert_eq!(engine.draw_list().quad_count(), 4);
        assert_eq!(engine.draw_list().color_changes(), 2);
        assert_eq!(colors(&engine), vec![Some(ColorRgba::white()), None]);

        let rects: Vec<Rect> = quads(&engine).iter().map(|q| q.quad).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(10.0, 20.0, 100.0, 1.0),
                Rect::new(10.0, 69.0, 100.0, 1.0),
                Rect::new(10.0, 20.0, 1.0, 50.0),
                Rect::new(109.0, 20.0, 1.0, 50.0),
            ]
        );
    }

    #[test]
    fn strips_are_one_device_pixel_thick() {
        let mut engine = HeadlessEngine::default();
        let t = ViewportTransform::new(3.0, 3.0, 4.0 / 3.0);
        Painter::new(&mut engine, t, WHITE).draw_sides(Rect::new(0.0, 0.0, 10.0, 10.0));

        let q = quads(&engine);
        assert_eq!(q[0].quad, Rect::new(0.0, 0.0, 1.0, 30.0));
        assert_eq!(q[1].quad, Rect::new(29.0, 0.0, 1.0, 30.0));
        assert_eq!(engine.draw_list().color_changes(), 0);
    }

    #[test]
    fn text_box_fills_then_outlines() {
        let mut engine = HeadlessEngine::new(HeadlessConfig::default());
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE).draw_text_box(100, 50, 10, 2);

        // Fill: 1 quad, outline: 4 quads.
        assert_eq!(engine.draw_list().quad_count(), 5);
        assert_eq!(
            colors(&engine),
            vec![Some(ColorRgba::black()), None, Some(ColorRgba::white()), None]
        );
        assert_eq!(quads(&engine)[0].quad, Rect::new(108.0, 58.0, 176.0, 48.0));
    }

    #[test]
    fn text_box_honours_cell_size() {
        let mut engine = HeadlessEngine::default();
        Painter::new(&mut engine, ViewportTransform::identity(), WHITE)
            .with_big_char(8, 10)
            .draw_text_box(0, 0, 3, 0);

        assert_eq!(quads(&engine)[0].quad, Rect::new(4.0, 5.0, 32.0, 10.0));
    }

    // ── renderer state ────────────────────────────────────────────────────

    #[test]
    fn set_color_and_update_screen_forward() {
        let mut engine = HeadlessEngine::default();
        {
            let mut painter = Painter::new(&mut engine, ViewportTransform::identity(), WHITE);
            painter.set_color(Some(ColorRgba::black()));
            painter.update_screen();
        }
        assert_eq!(engine.draw_list().color_changes(), 1);
        assert_eq!(engine.frames_presented(), 1);
    }
}
