// SPDX-License-Identifier: GPL-3.0-only

//! Interactive terminal UI
//!
//! Layout:
//! ```text
//! ┌ Search ──────────────────────────────────────────────┐
//! │ char                                                 │
//! └──────────────────────────────────────────────────────┘
//! ┌ Pokédex ──────────────────┐┌ Details ────────────────┐
//! │ #004 charmander           ││ #005 Charmeleon         │
//! │ #005 charmeleon           ││   Weight: 19 kg         │
//! │ #006 charizard            ││   Types: Fire           │
//! └───────────────────────────┘└─────────────────────────┘
//!  3 Pokémon found │ Enter: look up │ Tab: open │ Esc: quit
//! ```
//!
//! Key presses and finished effects both arrive as messages and are applied to the
//! [`AppModel`] one at a time, in arrival order.

use std::io;

use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::ListState,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    app::{AppModel, Effect, Message},
    core::{Pokedex, api::PokeApi},
};

mod ui;

/// Terminal-only state, everything else lives in the model
#[derive(Debug, Default)]
struct Tui {
    /// Contents of the search box
    input: String,
    /// Highlighted entry of the filtered list
    list_state: ListState,
    should_quit: bool,
}

impl Tui {
    /// The message a key press stands for, if any
    fn handle_key<A>(&mut self, key: KeyEvent, app: &AppModel<A>) -> Option<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                None
            }
            (KeyCode::Esc, _) => {
                if app.selected().is_some() || app.error().is_some() {
                    return Some(Message::Dismiss);
                }
                self.should_quit = true;
                None
            }
            (KeyCode::Enter, _) => Some(Message::Lookup(self.input.clone())),
            (KeyCode::Tab, _) => Some(Message::Select(self.list_state.selected().unwrap_or(0))),
            (KeyCode::Up, _) => {
                if let Some(current) = self.list_state.selected() {
                    self.list_state.select(Some(current.saturating_sub(1)));
                }
                None
            }
            (KeyCode::Down, _) => {
                let next = self.list_state.selected().map_or(0, |current| current + 1);
                if next < app.filtered().len() {
                    self.list_state.select(Some(next));
                }
                None
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.input.clear();
                self.search()
            }
            (KeyCode::Backspace, _) => {
                self.input.pop();
                self.search()
            }
            (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                self.search()
            }
            _ => None,
        }
    }

    /// The list changes with the search text, so the highlight starts over
    fn search(&mut self) -> Option<Message> {
        self.list_state.select(None);
        Some(Message::Search(self.input.clone()))
    }
}

/// Takes over the terminal until the user quits
pub async fn run<A: PokeApi>(app: AppModel<A>, init: Option<Effect>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, EventStream::new(), app, init).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draws and applies messages until the user quits.
///
/// When `events` runs out, effects that were already started are still awaited,
/// applied and drawn, the loop ends once the model has settled.
pub async fn run_loop<A, B, E>(
    terminal: &mut Terminal<B>,
    mut events: E,
    mut app: AppModel<A>,
    init: Option<Effect>,
) -> io::Result<()>
where
    A: PokeApi,
    B: Backend,
    E: Stream<Item = io::Result<Event>> + Unpin,
{
    let (sender, mut receiver) = mpsc::unbounded_channel();
    let mut tui = Tui::default();
    let mut input_closed = false;

    if let Some(effect) = init {
        spawn(effect, app.core(), &sender);
    }

    loop {
        terminal.draw(|frame| ui::render(frame, &app, &mut tui))?;

        if tui.should_quit || (input_closed && app.is_settled()) {
            break;
        }

        let message = tokio::select! {
            event = events.next(), if !input_closed => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    tui.handle_key(key, &app)
                }
                Some(Ok(_)) => None,
                Some(Err(e)) => return Err(e),
                None => {
                    tracing::debug!("Input closed, waiting for pending effects");
                    input_closed = true;
                    None
                }
            },
            Some(message) = receiver.recv() => Some(message),
        };

        if let Some(effect) = message.and_then(|message| app.update(message)) {
            spawn(effect, app.core(), &sender);
        }
    }

    Ok(())
}

/// Runs the effect on the runtime, its message comes back through `sender`
fn spawn<A: PokeApi>(effect: Effect, core: &Pokedex<A>, sender: &UnboundedSender<Message>) {
    let core = core.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
        let message = effect.run(&core).await;
        // Only fails once the loop is over
        let _ = sender.send(message);
    });
}
