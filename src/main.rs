use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

use jumbl::{
    app::{App, AppState},
    config::{Config, ConfigStore, FileConfigStore},
    error::ConfigError,
    game::GameSession,
    runtime::{CrosstermEventSource, GameEvent, Runner},
    wordlist::WordPool,
};

const TICK_RATE_MS: u64 = 100;

/// cozy word-unscramble tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A cozy word-unscramble TUI: guess the word behind the shuffled letters, rack up points round by round, and earn a confetti shower for a perfect game."
)]
pub struct Cli {
    /// number of rounds per game
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// points per correct guess
    #[clap(short = 'p', long)]
    points: Option<u32>,

    /// word list to draw from
    #[clap(short = 'l', long, value_enum)]
    word_list: Option<SupportedWordList>,

    /// comma-separated custom word pool, overrides the word list
    #[clap(short = 'w', long)]
    words: Option<String>,

    /// persist the effective settings as future defaults
    #[clap(long)]
    save_defaults: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum, strum_macros::Display)]
pub enum SupportedWordList {
    Common,
    Animals,
}

/// Effective settings after layering the command line over the persisted
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rounds: usize,
    pub points: u32,
    pub word_list: String,
}

impl Cli {
    fn resolve(&self, defaults: &Config) -> Settings {
        Settings {
            rounds: self.rounds.unwrap_or(defaults.rounds),
            points: self.points.unwrap_or(defaults.points),
            word_list: self
                .word_list
                .map(|l| l.to_string().to_lowercase())
                .unwrap_or_else(|| defaults.word_list.clone()),
        }
    }

    /// Build the pool from `--words` when given, otherwise from the
    /// resolved word list. Returns the pool with its label for the log.
    fn build_pool(&self, settings: &Settings) -> Result<(WordPool, String), ConfigError> {
        match &self.words {
            Some(raw) => {
                let words = raw
                    .split(',')
                    .map(|w| w.trim().to_string())
                    .filter(|w| !w.is_empty())
                    .collect();
                Ok((WordPool::new(words)?, "custom".to_string()))
            }
            None => Ok((
                WordPool::load(&settings.word_list)?,
                settings.word_list.clone(),
            )),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let settings = cli.resolve(&store.load());

    let (pool, label) = match cli.build_pool(&settings) {
        Ok(built) => built,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, e.to_string()).exit();
        }
    };

    let session = match GameSession::new(pool, settings.rounds, settings.points) {
        Ok(session) => session,
        Err(e) => {
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, e.to_string()).exit();
        }
    };

    if cli.save_defaults {
        let _ = store.save(&Config {
            rounds: settings.rounds,
            points: settings.points,
            word_list: settings.word_list.clone(),
        });
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, label);
    let res = run_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let events = CrosstermEventSource::new();
    let runner = Runner::new(events, Duration::from_millis(TICK_RATE_MS));

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {
                app.on_tick();
                // Only redraw on ticks while the confetti is animating
                if app.confetti.is_active() {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            GameEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Enter => {
                        app.submit();
                        start_confetti_if_finished(terminal, app);
                    }
                    KeyCode::Tab => {
                        app.skip();
                        start_confetti_if_finished(terminal, app);
                    }
                    KeyCode::Char(c) => match app.state {
                        AppState::Playing => app.type_char(c),
                        AppState::Summary => match c {
                            'r' => app.replay(),
                            'q' => break,
                            _ => {}
                        },
                    },
                    _ => {}
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

fn start_confetti_if_finished<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) {
    if app.state == AppState::Summary {
        let size = terminal.size().unwrap_or_default();
        app.start_confetti_if_perfect(size.width, size.height);
    }
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["jumbl"]);

        assert_eq!(cli.rounds, None);
        assert_eq!(cli.points, None);
        assert_eq!(cli.word_list, None);
        assert_eq!(cli.words, None);
        assert!(!cli.save_defaults);
    }

    #[test]
    fn test_cli_rounds_and_points() {
        let cli = Cli::parse_from(["jumbl", "-r", "5", "-p", "10"]);
        assert_eq!(cli.rounds, Some(5));
        assert_eq!(cli.points, Some(10));

        let cli = Cli::parse_from(["jumbl", "--rounds", "3", "--points", "50"]);
        assert_eq!(cli.rounds, Some(3));
        assert_eq!(cli.points, Some(50));
    }

    #[test]
    fn test_cli_word_list() {
        let cli = Cli::parse_from(["jumbl", "-l", "animals"]);
        assert_eq!(cli.word_list, Some(SupportedWordList::Animals));

        let cli = Cli::parse_from(["jumbl", "--word-list", "common"]);
        assert_eq!(cli.word_list, Some(SupportedWordList::Common));
    }

    #[test]
    fn test_cli_custom_words() {
        let cli = Cli::parse_from(["jumbl", "-w", "java,kotlin"]);
        assert_eq!(cli.words, Some("java,kotlin".to_string()));
    }

    #[test]
    fn test_supported_word_list_display() {
        assert_eq!(SupportedWordList::Common.to_string(), "Common");
        assert_eq!(SupportedWordList::Animals.to_string(), "Animals");
    }

    #[test]
    fn test_resolve_falls_back_to_defaults() {
        let cli = Cli::parse_from(["jumbl"]);
        let settings = cli.resolve(&Config::default());

        assert_eq!(settings.rounds, 10);
        assert_eq!(settings.points, 20);
        assert_eq!(settings.word_list, "common");
    }

    #[test]
    fn test_resolve_prefers_the_command_line() {
        let cli = Cli::parse_from(["jumbl", "-r", "3", "-p", "5", "-l", "animals"]);
        let defaults = Config {
            rounds: 8,
            points: 15,
            word_list: "common".to_string(),
        };
        let settings = cli.resolve(&defaults);

        assert_eq!(settings.rounds, 3);
        assert_eq!(settings.points, 5);
        assert_eq!(settings.word_list, "animals");
    }

    #[test]
    fn test_resolve_keeps_persisted_values_for_unset_flags() {
        let cli = Cli::parse_from(["jumbl", "-r", "3"]);
        let defaults = Config {
            rounds: 8,
            points: 15,
            word_list: "animals".to_string(),
        };
        let settings = cli.resolve(&defaults);

        assert_eq!(settings.rounds, 3);
        assert_eq!(settings.points, 15);
        assert_eq!(settings.word_list, "animals");
    }

    #[test]
    fn test_build_pool_from_custom_words() {
        let cli = Cli::parse_from(["jumbl", "-w", " java , kotlin ,"]);
        let settings = cli.resolve(&Config::default());

        let (pool, label) = cli.build_pool(&settings).unwrap();
        assert_eq!(label, "custom");
        assert_eq!(pool.len(), 2);
        assert!(pool.words().contains(&"java".to_string()));
        assert!(pool.words().contains(&"kotlin".to_string()));
    }

    #[test]
    fn test_build_pool_rejects_bad_custom_words() {
        let cli = Cli::parse_from(["jumbl", "-w", "ok,n0pe"]);
        let settings = cli.resolve(&Config::default());

        assert!(cli.build_pool(&settings).is_err());
    }

    #[test]
    fn test_build_pool_from_word_list() {
        let cli = Cli::parse_from(["jumbl", "-l", "animals"]);
        let settings = cli.resolve(&Config::default());

        let (pool, label) = cli.build_pool(&settings).unwrap();
        assert_eq!(label, "animals");
        assert!(pool.len() > 20);
    }

    #[test]
    fn test_build_pool_unknown_list_from_config() {
        let cli = Cli::parse_from(["jumbl"]);
        let defaults = Config {
            word_list: "klingon".to_string(),
            ..Config::default()
        };
        let settings = cli.resolve(&defaults);

        assert!(cli.build_pool(&settings).is_err());
    }

    #[test]
    fn test_tick_rate_constant() {
        assert_eq!(TICK_RATE_MS, 100);

        const _: () = assert!(TICK_RATE_MS > 0);
        const _: () = assert!(TICK_RATE_MS <= 1000); // sub-second
    }
}
