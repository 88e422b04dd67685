use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use summarizer_client::ClientHandle;
use summarizer_core::{update, AppState, AppViewModel, Msg, Panel};
use summarizer_logging::{summarizer_debug, summarizer_info};

use super::effects::EffectRunner;
use super::input::{map_key, map_paste, KeyAction};
use super::ui;
use super::ui::render::UiState;
use crate::config::AppConfig;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    summarizer_info!("Starting with API base {}", config.client.base_url);
    let client = ClientHandle::new(config.client).context("failed to start HTTP client")?;
    let mut app = App::new(EffectRunner::new(client));
    let mut session = TerminalSession::enter().context("failed to set up terminal")?;

    app.dispatch(Msg::Started);
    let mut last_tick = Instant::now();
    loop {
        app.pump();
        if app.needs_redraw {
            session
                .terminal
                .draw(|frame| ui::render::render(frame, &app.view, &mut app.ui))?;
            app.needs_redraw = false;
        }

        let timeout = ui::constants::TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, &app.view),
                Event::Paste(text) => map_paste(&text, &app.view),
                Event::Resize(..) => {
                    app.needs_redraw = true;
                    KeyAction::Ignore
                }
                _ => KeyAction::Ignore,
            };
            match action {
                KeyAction::Quit => break,
                KeyAction::Dispatch(msg) => app.dispatch(msg),
                KeyAction::Scroll(delta) => app.scroll(delta),
                KeyAction::Ignore => {}
            }
        }

        if last_tick.elapsed() >= ui::constants::TICK {
            app.tick();
            last_tick = Instant::now();
        }
    }

    summarizer_info!("Quit requested");
    Ok(())
}

/// Owns the core state and feeds it messages from the terminal and the client.
struct App {
    state: AppState,
    view: AppViewModel,
    ui: UiState,
    effects: EffectRunner,
    needs_redraw: bool,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            ui: UiState::default(),
            effects,
            needs_redraw: true,
        }
    }

    /// Applies client results that arrived since the last call.
    fn pump(&mut self) {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            let view = state.view();
            if matches!(view.panel, Panel::Result { .. }) && view.panel != self.view.panel {
                self.ui.scroll = 0;
            }
            self.view = view;
            self.needs_redraw = true;
        }
        self.state = state;

        for msg in self.effects.run(effects) {
            summarizer_debug!("Effect failed before dispatch: {:?}", msg);
            self.dispatch(msg);
        }
    }

    fn tick(&mut self) {
        self.dispatch(Msg::Tick);
        if !self.view.submit_enabled {
            self.ui.spinner_frame = self.ui.spinner_frame.wrapping_add(1);
            self.needs_redraw = true;
        }
    }

    fn scroll(&mut self, delta: i32) {
        if !matches!(self.view.panel, Panel::Result { .. }) {
            return;
        }
        let next = (i32::from(self.ui.scroll) + delta).clamp(0, i32::from(self.ui.max_scroll));
        self.ui.scroll = u16::try_from(next).unwrap_or(self.ui.max_scroll);
        self.needs_redraw = true;
    }
}

/// Raw-mode alternate screen; restored on drop, including on error paths.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}
