//! Console front-end and entry point.
//!
//! A thin line-oriented shell over the library: each input line is mapped to an
//! [`Event`], handed to [`handle_event`], and the resulting actions are executed
//! here. Everything with side effects (stdout, the export file, preference
//! persistence) happens in this file.
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse `key=value` arguments, initialize tracing, open preferences
//! 2. **Initialize**: Load the seed directory and the persisted theme
//! 3. **Loop**: Read a command, handle the event, execute actions, render
//! 4. **Exit**: On `quit` or end of input, flush spans
//!
//! # Commands
//!
//! - `view <id>`: Show a record's details
//! - `add`: Open an empty add form
//! - `edit <id>`: Open the edit form for a record
//! - `delete <id>`: Ask to delete a record
//! - `set <field> <value>`: Fill a form field (`name`, `email`, `password`,
//!   `role`, `phone`, `address`)
//! - `submit`: Submit the open form
//! - `confirm`: Confirm the pending delete
//! - `close` / `cancel`: Close the open modal
//! - `search [text]`: Filter by name or email; no text clears the filter
//! - `export`: Write `users.csv` to the export directory
//! - `theme`: Toggle light/dark
//! - `help`: List commands
//! - `quit`: Exit

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use userdeck::app::FormField;
use userdeck::storage::{save_theme, PreferenceStore};
use userdeck::ui::{render, render_notification};
use userdeck::{handle_event, Action, AppState, Config, Event, Notification};

const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 100;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const HELP: &str = "\
Commands:
  view <id>            show a user's details
  add                  open the add form
  edit <id>            open the edit form
  delete <id>          ask to delete a user
  set <field> <value>  fill a form field (name, email, password, role, phone, address)
  submit               submit the open form
  confirm              confirm the pending delete
  close | cancel       close the open modal
  search [text]        filter by name or email; no text clears the filter
  export               write users.csv to the export directory
  theme                toggle light/dark
  help                 show this list
  quit                 exit";

/// Console shell state.
///
/// Wraps the library's `AppState` with the concerns only the front-end has:
/// where exports go and where preferences are persisted.
struct Shell {
    app: AppState,
    config: Config,
    preferences: Box<dyn PreferenceStore>,

    /// Notification lines printed under the next frame.
    messages: Vec<String>,
    running: bool,
}

/// What a command line turned into.
enum Command {
    Event(Event),
    Help,
    Unknown(String),
}

impl Shell {
    /// Handles one input line. Returns `true` if the frame should be redrawn.
    fn update(&mut self, line: &str) -> bool {
        let event = match parse_command(line) {
            Some(Command::Event(event)) => event,
            Some(Command::Help) => {
                self.messages.push(HELP.to_string());
                return true;
            }
            Some(Command::Unknown(message)) => {
                let notification = Notification::error(message);
                self.messages
                    .push(render_notification(&notification, &self.app.theme));
                return true;
            }
            None => return false,
        };

        let span = tracing::debug_span!("shell_update", event_type = ?event);
        let _guard = span.entered();

        match handle_event(&mut self.app, &event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                let had_actions = !actions.is_empty();
                for action in &actions {
                    self.execute_action(action);
                }
                should_render || had_actions
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                self.messages
                    .push(render_notification(&Notification::error(e.to_string()), &self.app.theme));
                true
            }
        }
    }

    fn execute_action(&mut self, action: &Action) {
        tracing::debug!(action = ?action, "executing action");

        match action {
            Action::Notify(notification) => {
                self.messages
                    .push(render_notification(notification, &self.app.theme));
            }
            Action::Download { filename, contents } => {
                let path = self.config.export_dir.join(filename);
                let result = std::fs::create_dir_all(&self.config.export_dir)
                    .and_then(|()| std::fs::write(&path, contents));
                let notification = match result {
                    Ok(()) => {
                        tracing::info!(path = ?path, bytes = contents.len(), "export written");
                        Notification::success(format!("Exported to {}", path.display()))
                    }
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "export failed");
                        Notification::error(format!("Export failed: {e}"))
                    }
                };
                self.messages
                    .push(render_notification(&notification, &self.app.theme));
            }
            Action::SaveTheme(choice) => {
                if !save_theme(self.preferences.as_mut(), *choice) {
                    tracing::debug!(theme = %choice, "theme applied for this session only");
                }
            }
            Action::Quit => {
                self.running = false;
            }
        }
    }

    /// Draws the current frame followed by any pending notifications.
    fn draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        let (rows, cols) = terminal_size();
        let frame = render(&self.app, rows, cols);
        write!(out, "{CLEAR_SCREEN}{frame}")?;
        for message in self.messages.drain(..) {
            writeln!(out, "{message}")?;
        }
        write!(out, "> ")?;
        out.flush()
    }
}

/// Maps an input line to a command. Blank lines map to `None`.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim_start();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line.trim_end(), ""), |(verb, rest)| (verb, rest));
    if verb.is_empty() {
        return None;
    }

    let id_event = |make: fn(u64) -> Event| match rest.trim().parse::<u64>() {
        Ok(id) => Command::Event(make(id)),
        Err(_) => Command::Unknown(format!("\"{verb}\" needs a numeric user id")),
    };

    Some(match verb {
        "view" => id_event(Event::ViewUser),
        "edit" => id_event(Event::EditUser),
        "delete" => id_event(Event::DeleteUser),
        "add" => Command::Event(Event::AddUser),
        "set" => {
            let rest = rest.trim_start();
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            match FormField::from_name(name) {
                Some(field) => Command::Event(Event::SetField {
                    field,
                    value: value.trim_end_matches(['\r', '\n']).to_string(),
                }),
                None => Command::Unknown(format!("Unknown field \"{name}\"")),
            }
        }
        "submit" => Command::Event(Event::Submit),
        "confirm" => Command::Event(Event::Confirm),
        "close" | "cancel" => Command::Event(Event::Close),
        "search" => {
            let query = rest.trim_end_matches(['\r', '\n']);
            if query.trim().is_empty() {
                Command::Event(Event::ClearSearch)
            } else {
                Command::Event(Event::Search(query.to_string()))
            }
        }
        "export" => Command::Event(Event::ExportCsv),
        "theme" => Command::Event(Event::ToggleTheme),
        "help" => Command::Help,
        "quit" | "exit" => Command::Event(Event::Quit),
        other => Command::Unknown(format!("Unknown command \"{other}\", type help")),
    })
}

/// Terminates the open prompt line. Returns `false`, after reporting on
/// stderr, if the write fails.
fn end_prompt_line(out: &mut impl Write) -> bool {
    match writeln!(out).and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("userdeck: {e}");
            false
        }
    }
}

/// Frame size from `LINES`/`COLUMNS`, falling back to 24x100.
fn terminal_size() -> (usize, usize) {
    let read = |key: &str| {
        std::env::var(key)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
    };
    (
        read("LINES").unwrap_or(DEFAULT_ROWS),
        read("COLUMNS").unwrap_or(DEFAULT_COLS),
    )
}

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("userdeck: {e}");
            return ExitCode::FAILURE;
        }
    };
    let provider = userdeck::observability::init_tracing(&config);

    let span = tracing::debug_span!("shell_load");
    let guard = span.entered();
    tracing::debug!(config = ?config, "parsed configuration");

    let preferences = userdeck::open_preferences(&config);
    let app = match userdeck::initialize(&config, preferences.as_ref()) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "initialization failed");
            eprintln!("userdeck: {e}");
            return ExitCode::FAILURE;
        }
    };
    drop(guard);

    let mut shell = Shell {
        app,
        config,
        preferences,
        messages: Vec::new(),
        running: true,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut status = ExitCode::SUCCESS;

    if let Err(e) = shell.draw(&mut stdout) {
        eprintln!("userdeck: {e}");
        return ExitCode::FAILURE;
    }

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("userdeck: {e}");
                status = ExitCode::FAILURE;
                break;
            }
        };

        let should_render = shell.update(&line);
        if !shell.running {
            break;
        }
        let drawn = if should_render {
            shell.draw(&mut stdout)
        } else {
            write!(stdout, "> ").and_then(|()| stdout.flush())
        };
        if let Err(e) = drawn {
            eprintln!("userdeck: {e}");
            status = ExitCode::FAILURE;
            break;
        }
    }
    if !end_prompt_line(&mut stdout) {
        status = ExitCode::FAILURE;
    }

    if let Some(provider) = provider {
        if let Err(e) = provider.shutdown() {
            eprintln!("userdeck: failed to flush spans: {e}");
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> Event {
        match parse_command(line) {
            Some(Command::Event(event)) => event,
            _ => panic!("expected an event for {line:?}"),
        }
    }

    #[test]
    fn id_commands_parse() {
        assert_eq!(event("view 3"), Event::ViewUser(3));
        assert_eq!(event("  edit 12 "), Event::EditUser(12));
        assert_eq!(event("delete 1"), Event::DeleteUser(1));
        assert!(matches!(parse_command("view abc"), Some(Command::Unknown(_))));
    }

    #[test]
    fn set_keeps_inner_spaces() {
        assert_eq!(
            event("set address 1 Main St,  Springfield"),
            Event::SetField {
                field: FormField::Address,
                value: "1 Main St,  Springfield".to_string()
            }
        );
        assert_eq!(
            event("set phone"),
            Event::SetField {
                field: FormField::Phone,
                value: String::new()
            }
        );
        assert!(matches!(parse_command("set age 4"), Some(Command::Unknown(_))));
    }

    #[test]
    fn search_without_text_clears() {
        assert_eq!(event("search"), Event::ClearSearch);
        assert_eq!(event("search ann "), Event::Search("ann ".to_string()));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn final_newline_failure_is_reported() {
        let mut out = Vec::new();
        assert!(end_prompt_line(&mut out));
        assert_eq!(out, b"\n");
        assert!(!end_prompt_line(&mut ClosedPipe));
    }

    #[test]
    fn blank_line_is_ignored() {
        assert!(parse_command("   ").is_none());
        assert!(matches!(parse_command("help"), Some(Command::Help)));
        assert!(matches!(parse_command("fly"), Some(Command::Unknown(_))));
    }
}
