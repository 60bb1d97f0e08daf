use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    cursor::Show,
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

mod app;
mod cli;
mod config;
mod error;
mod gemini;
mod logging;
mod models;
mod solver;
mod theme;
mod ui;

use app::App;
use cli::{parse_args, CliArgs, VERSION};
use config::Config;
use gemini::GeminiClient;
use models::Action;
use solver::{spawn_request, Solver};

/// Animation tick interval
const TICK_RATE: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();

    if let Some(question) = args.question.clone() {
        logging::init_stderr_logger(args.verbose)?;
        return ask_once(&args, &question).await;
    }

    let log_path = logging::init_file_logger(args.log_file.clone(), args.verbose)?;
    tracing::info!("Starting question-solver v{} (logging to {})", VERSION, log_path.display());

    // Refuse to start without credentials
    let config = Config::load(&args)?;
    let solver: Arc<dyn Solver> = Arc::new(GeminiClient::new(&config)?);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        // Needed to tell Shift+Enter apart from Enter
        stdout().execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // A panic must not leave the shell in raw mode
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(enhanced_keys);
        default_hook(info);
    }));

    // Run the app
    let result = run(&mut terminal, solver, &config.model).await;

    if let Err(e) = restore_terminal(enhanced_keys) {
        tracing::error!("Failed to restore terminal: {}", e);
        if result.is_ok() {
            return Err(e.into());
        }
    }

    if let Err(ref e) = result {
        tracing::error!("Exiting after error: {:#}", e);
    }
    result
}

/// Undo every terminal mode set at startup, even when one step fails
fn restore_terminal(enhanced_keys: bool) -> io::Result<()> {
    let mut out = stdout();
    let pop_flags = if enhanced_keys {
        out.execute(PopKeyboardEnhancementFlags).map(drop)
    } else {
        Ok(())
    };
    first_error([
        pop_flags,
        out.execute(DisableBracketedPaste).map(drop),
        disable_raw_mode(),
        out.execute(LeaveAlternateScreen).map(drop),
        out.execute(Show).map(drop),
    ])
}

/// Keep the first failure of steps that have all already run
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().fold(Ok(()), |first, result| first.and(result))
}

/// Answer a single question on stdout without starting the TUI
async fn ask_once(args: &CliArgs, question: &str) -> anyhow::Result<()> {
    let config = Config::load(args)?;
    let client = GeminiClient::new(&config)?;
    tracing::debug!("Asking {} in one-shot mode", client.model());

    let answer = client.solve_question(question).await?;
    println!("{answer}");
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    solver: Arc<dyn Solver>,
    model: &str,
) -> anyhow::Result<()> {
    let mut app = App::new(model);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            _ = ticker.tick() => app.on_tick(),
            Some(outcome) = rx.recv() => app.finish(outcome),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match app.handle_key(key) {
                    Action::Submit(prompt) => {
                        spawn_request(Arc::clone(&solver), prompt, tx.clone());
                    }
                    Action::Quit => break,
                    Action::None => {}
                },
                Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "terminal event stream closed",
                    )
                    .into());
                }
            },
        }
    }

    tracing::info!("Quit requested");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let result = first_error([
            Ok(()),
            Err(io::Error::other("pop flags")),
            Err(io::Error::other("raw mode")),
        ]);
        assert_eq!(result.unwrap_err().to_string(), "pop flags");
    }

    #[test]
    fn test_restore_steps_run_after_a_failure() {
        let ran = RefCell::new(Vec::new());
        let step = |name: &'static str, ok: bool| {
            ran.borrow_mut().push(name);
            if ok {
                Ok(())
            } else {
                Err(io::Error::other(name))
            }
        };

        let result = first_error([
            step("pop flags", false),
            step("paste", true),
            step("raw mode", true),
            step("screen", true),
        ]);

        assert_eq!(result.unwrap_err().to_string(), "pop flags");
        assert_eq!(*ran.borrow(), vec!["pop flags", "paste", "raw mode", "screen"]);
    }
}
