//! Console commands owned by the UI module.
//!
//! The engine offers every unrecognised console command to the UI once per
//! frame. [`dispatch`] decides whether the UI claims it and routes it to a
//! [`CommandHandlers`] implementation supplied by the menu layer.

use uiatoms_engine::trap::{Client, Console};

/// Commands the UI recognises. Names match case-insensitively.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UiCommand {
    /// `ui_test`: opens the post-game screen but does not claim the command.
    Test,
    Report,
    Load,
    /// `postgame`: claimed, no action.
    PostGame,
    Cache,
    /// `ui_teamOrders`: claimed, no action.
    TeamOrders,
    /// Only while disconnected.
    Campaign,
    /// Only while disconnected.
    ListCampaigns,
}

impl UiCommand {
    pub const ALL: [UiCommand; 8] = [
        UiCommand::Test,
        UiCommand::Report,
        UiCommand::Load,
        UiCommand::PostGame,
        UiCommand::Cache,
        UiCommand::TeamOrders,
        UiCommand::Campaign,
        UiCommand::ListCampaigns,
    ];

    /// Console name of the command.
    pub const fn name(self) -> &'static str {
        match self {
            UiCommand::Test => "ui_test",
            UiCommand::Report => "ui_report",
            UiCommand::Load => "ui_load",
            UiCommand::PostGame => "postgame",
            UiCommand::Cache => "ui_cache",
            UiCommand::TeamOrders => "ui_teamOrders",
            UiCommand::Campaign => "campaign",
            UiCommand::ListCampaigns => "listcampaigns",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// True for commands that only apply on the main menu, away from a server.
    #[inline]
    pub const fn requires_disconnected(self) -> bool {
        matches!(self, UiCommand::Campaign | UiCommand::ListCampaigns)
    }
}

/// Menu-layer actions behind the UI console commands.
///
/// All methods default to doing nothing so a host implements only what it
/// supports.
pub trait CommandHandlers {
    fn show_post_game(&mut self, new_high_score: bool) {
        let _ = new_high_score;
    }

    fn report(&mut self) {}

    fn load(&mut self) {}

    /// Precaches every menu asset.
    fn cache_all(&mut self) {}

    /// `args` are the tokens after the command name.
    fn campaign(&mut self, args: &[String]) {
        let _ = args;
    }

    fn list_campaigns(&mut self) {}
}

impl CommandHandlers for () {}

/// Routes the command currently in `argv` to `handlers`.
///
/// Returns `true` when the UI claimed the command. Client state is only
/// queried once none of the always-available commands matched.
pub fn dispatch<T, H>(traps: &T, handlers: &mut H) -> bool
where
    T: Console + Client + ?Sized,
    H: CommandHandlers + ?Sized,
{
    let name = traps.argv(0);
    let command = UiCommand::parse(&name);
    log::trace!("console command {name:?} -> {command:?}");

    match command {
        // Deliberately not claimed: falls through to the checks below.
        Some(UiCommand::Test) => handlers.show_post_game(true),
        Some(UiCommand::Report) => {
            handlers.report();
            return true;
        }
        Some(UiCommand::Load) => {
            handlers.load();
            return true;
        }
        Some(UiCommand::PostGame) | Some(UiCommand::TeamOrders) => return true,
        Some(UiCommand::Cache) => {
            handlers.cache_all();
            return true;
        }
        _ => {}
    }

    if !traps.client_state().is_disconnected() {
        if command.is_some_and(UiCommand::requires_disconnected) {
            log::debug!("{name}: only available while disconnected");
        }
        return false;
    }

    match command {
        Some(UiCommand::Campaign) => {
            let args: Vec<String> = (1..traps.argc()).map(|i| traps.argv(i)).collect();
            handlers.campaign(&args);
            true
        }
        Some(UiCommand::ListCampaigns) => {
            handlers.list_campaigns();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiatoms_engine::headless::HeadlessEngine;
    use uiatoms_engine::trap::ConnState;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl CommandHandlers for Recorder {
        fn show_post_game(&mut self, new_high_score: bool) {
            self.calls.push(format!("post_game({new_high_score})"));
        }
        fn report(&mut self) {
            self.calls.push("report".into());
        }
        fn load(&mut self) {
            self.calls.push("load".into());
        }
        fn cache_all(&mut self) {
            self.calls.push("cache".into());
        }
        fn campaign(&mut self, args: &[String]) {
            self.calls.push(format!("campaign{args:?}"));
        }
        fn list_campaigns(&mut self) {
            self.calls.push("list".into());
        }
    }

    fn run(engine: &mut HeadlessEngine, line: &str) -> (bool, Vec<String>) {
        engine.set_command(line);
        let mut rec = Recorder::default();
        let handled = dispatch(&*engine, &mut rec);
        (handled, rec.calls)
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn names_round_trip_case_insensitively() {
        for c in UiCommand::ALL {
            assert_eq!(UiCommand::parse(c.name()), Some(c));
            assert_eq!(UiCommand::parse(&c.name().to_ascii_uppercase()), Some(c));
        }
        assert_eq!(UiCommand::parse("ui_teamorders"), Some(UiCommand::TeamOrders));
        assert_eq!(UiCommand::parse("quit"), None);
    }

    // ── always-available commands ─────────────────────────────────────────

    #[test]
    fn handled_commands_call_their_handler() {
        let mut engine = HeadlessEngine::default();
        assert_eq!(run(&mut engine, "ui_report"), (true, vec!["report".to_string()]));
        assert_eq!(run(&mut engine, "UI_LOAD"), (true, vec!["load".to_string()]));
        assert_eq!(run(&mut engine, "ui_cache"), (true, vec!["cache".to_string()]));
    }

    #[test]
    fn no_op_commands_are_claimed() {
        let mut engine = HeadlessEngine::default();
        engine.set_conn_state(ConnState::Active);
        assert_eq!(run(&mut engine, "postgame"), (true, vec![]));
        assert_eq!(run(&mut engine, "ui_teamOrders"), (true, vec![]));
    }

    #[test]
    fn ui_test_runs_but_is_not_claimed() {
        let mut engine = HeadlessEngine::default();
        assert_eq!(run(&mut engine, "ui_test"), (false, vec!["post_game(true)".to_string()]));
    }

    #[test]
    fn unknown_command_is_not_claimed() {
        let mut engine = HeadlessEngine::default();
        assert_eq!(run(&mut engine, "vid_restart"), (false, vec![]));
        assert_eq!(run(&mut engine, ""), (false, vec![]));
    }

    #[test]
    fn connection_does_not_gate_menu_commands() {
        let mut engine = HeadlessEngine::default();
        engine.set_conn_state(ConnState::Active);
        assert_eq!(run(&mut engine, "ui_report"), (true, vec!["report".to_string()]));
    }

    // ── disconnected-only commands ────────────────────────────────────────

    #[test]
    fn campaign_commands_run_while_disconnected() {
        let mut engine = HeadlessEngine::default();
        assert_eq!(
            run(&mut engine, "campaign cmpgn_africa"),
            (true, vec![r#"campaign["cmpgn_africa"]"#.to_string()])
        );
        assert_eq!(run(&mut engine, "ListCampaigns"), (true, vec!["list".to_string()]));
    }

    #[test]
    fn campaign_commands_are_ignored_when_connected() {
        let mut engine = HeadlessEngine::default();
        for state in [ConnState::Connecting, ConnState::Active, ConnState::Uninitialized] {
            engine.set_conn_state(state);
            assert_eq!(run(&mut engine, "campaign"), (false, vec![]));
            assert_eq!(run(&mut engine, "listcampaigns"), (false, vec![]));
        }
    }

    #[test]
    fn unit_handlers_accept_everything() {
        let mut engine = HeadlessEngine::default();
        engine.set_command("campaign x");
        assert!(dispatch(&engine, &mut ()));
    }
}
