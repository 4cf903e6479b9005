use anyhow::{Context, Result};
use clap::Parser;

use uiatoms_engine::logging::{init_logging, LoggingConfig};
use uiatoms_engine::scene::DrawCmd;
use uiatoms_engine::trap::{ConnState, Renderer};
use uiatoms_ui::prelude::*;

/// Boots the UI against a headless engine, draws one menu frame and feeds
/// console commands through the UI's dispatcher.
#[derive(Parser, Debug)]
#[command(name = "uiatoms-studio", version)]
struct Args {
    /// Video mode in pixels, `WxH`.
    #[arg(long, default_value = "1280x720", value_parser = parse_size)]
    size: (u32, u32),

    /// Window aspect override (defaults to width / height).
    #[arg(long)]
    aspect: Option<f32>,

    /// Set the `developer` cvar.
    #[arg(long)]
    developer: bool,

    /// Pretend the client is connected to a server.
    #[arg(long)]
    connected: bool,

    /// Milliseconds between console commands.
    #[arg(long, default_value_t = 16)]
    frame_ms: i32,

    /// Log filter, `env_logger` syntax.
    #[arg(long)]
    log: Option<String>,

    /// Console command lines, e.g. `ui_cache` or `"campaign cmpgn_africa"`.
    commands: Vec<String>,
}

/// Logs whatever the menu layer would have done.
#[derive(Default)]
struct StudioHandlers {
    ran: Vec<&'static str>,
}

impl CommandHandlers for StudioHandlers {
    fn show_post_game(&mut self, new_high_score: bool) {
        log::info!("post-game screen (new high score: {new_high_score})");
        self.ran.push("show_post_game");
    }

    fn report(&mut self) {
        log::info!("menu report requested");
        self.ran.push("report");
    }

    fn load(&mut self) {
        log::info!("menu reload requested");
        self.ran.push("load");
    }

    fn cache_all(&mut self) {
        log::info!("precaching menu assets");
        self.ran.push("cache_all");
    }

    fn campaign(&mut self, args: &[String]) {
        match args.first() {
            Some(name) => log::info!("starting campaign {name}"),
            None => log::warn!("campaign: no campaign name given"),
        }
        self.ran.push("campaign");
    }

    fn list_campaigns(&mut self) {
        log::info!("listing campaigns");
        self.ran.push("list_campaigns");
    }
}

/// Parses a `WxH` video mode such as `1920x1080`.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("bad height {h:?}: {e}"))?;
    Ok((w, h))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    let (width, height) = args.size;
    let mut config = HeadlessConfig::default()
        .size(width, height)
        .developer(args.developer);
    if let Some(aspect) = args.aspect {
        config = config.window_aspect(aspect);
    }
    if args.connected {
        config = config.conn_state(ConnState::Active);
    }

    let mut engine = HeadlessEngine::new(config);
    let mut ui = UiSession::init(UiConfig::default(), &mut engine)
        .with_context(|| format!("failed to start UI at {width}x{height}"))?;

    ui.set_cursor(Vec2::new(320.0, 250.0));
    draw_main_menu(&ui, &mut engine);
    report_frame(&engine);
    engine.clear_draws();

    let mut handlers = StudioHandlers::default();
    let mut now = 0;
    for line in &args.commands {
        now += args.frame_ms;
        engine.set_command(line);
        let claimed = ui.console_command(now, &engine, &mut handlers);
        diag::dprint(&mut engine, &format!("{line:?} claimed: {claimed}\n"));
        if !claimed {
            log::warn!("{line:?} not handled by the UI");
        }
    }

    log::info!(
        "{} command(s), {} handler call(s), last frame {} ms",
        args.commands.len(),
        handlers.ran.len(),
        ui.frame().frame_time
    );

    ui.shutdown();
    Ok(())
}

/// One frame of a plausible main menu, exercising every primitive.
fn draw_main_menu<R: Renderer>(ui: &UiSession, engine: &mut R) {
    let buttons = [
        ("PLAY ONLINE", Rect::new(240.0, 200.0, 160.0, 24.0)),
        ("CAMPAIGN", Rect::new(240.0, 236.0, 160.0, 24.0)),
        ("OPTIONS", Rect::new(240.0, 272.0, 160.0, 24.0)),
    ];
    let hovered: Vec<bool> = buttons.iter().map(|(_, r)| ui.cursor_in_rect(*r)).collect();
    let cursor = ui.cursor();
    let emblem = engine.register_shader_nomip("ui/assets/emblem");

    let mut painter = ui.painter(engine);

    painter.fill_rect(Rect::new(0.0, 0.0, 640.0, 480.0), ColorRgba::new(0.05, 0.05, 0.08, 1.0));
    painter.draw_named_pic(Rect::new(192.0, 40.0, 256.0, 128.0), "ui/assets/et_logo");

    for ((label, rect), hot) in buttons.iter().zip(hovered) {
        let fill = if hot {
            ColorRgba::new(0.4, 0.35, 0.2, 1.0)
        } else {
            ColorRgba::new(0.2, 0.2, 0.2, 0.8)
        };
        painter.fill_rect(*rect, fill);
        painter.draw_rect(*rect, ColorRgba::white());
        log::trace!("button {label} hovered={hot}");
    }

    painter.draw_text_box(8, 400, 24, 2);

    // Mirrored emblems either side of the logo.
    painter.draw_handle_pic(Rect::new(120.0, 72.0, 64.0, 64.0), emblem);
    painter.draw_handle_pic(Rect::new(520.0, 72.0, -64.0, 64.0), emblem);

    painter.draw_rotated_pic(Rect::new(cursor.x, cursor.y, 32.0, 32.0), emblem, 15.0);
    painter.update_screen();
}

fn report_frame(engine: &HeadlessEngine) {
    let list = engine.draw_list();
    for item in list.items() {
        match &item.cmd {
            DrawCmd::StretchPic(c) => log::debug!(
                "#{:<3} stretch {:?} uv {:?} shader {:?}",
                item.order,
                c.quad,
                c.uv,
                engine.shader_name(c.shader)
            ),
            DrawCmd::RotatedPic(c) => log::debug!(
                "#{:<3} rotated {:?} by {} shader {:?}",
                item.order,
                c.quad,
                c.angle,
                engine.shader_name(c.shader)
            ),
            DrawCmd::SetColor(Some(color)) => {
                log::debug!("#{:<3} color {:?}", item.order, color.to_array())
            }
            DrawCmd::SetColor(None) => log::debug!("#{:<3} color reset", item.order),
            DrawCmd::UpdateScreen => log::debug!("#{:<3} update screen", item.order),
        }
    }

    log::info!(
        "menu frame: {} calls, {} quads, {} color changes",
        list.len(),
        list.quad_count(),
        list.color_changes()
    );
}
