use std::io::{self, BufRead, Stdout};
use std::sync::mpsc;
use std::thread;

use finder_core::{resolve_initial_theme, Msg, SearchController};
use finder_logging::{finder_info, finder_warn};

use super::config::AppConfig;
use super::console::{parse_line, ConsoleCommand, ConsoleDocument, ConsolePage};
use super::effects::EffectRunner;
use super::persistence::ThemeStore;

/// Everything the UI loop reacts to, from the console or the engine.
pub enum AppEvent {
    Console(ConsoleCommand),
    Engine(Msg),
}

type Controller = SearchController<ConsolePage<Stdout>>;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let prefs = ThemeStore::in_dir(&config.state_dir);
    let theme = resolve_initial_theme(prefs.load(), config.prefers_dark);

    let page = ConsolePage::new(io::stdout(), config.settings.base_url.clone());
    let Ok(mut controller) =
        SearchController::initialize(&ConsoleDocument, page, config.search.clone(), theme)
    else {
        // Already logged; the rest of the page keeps working without search.
        return Ok(());
    };

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(config.settings.clone(), event_tx.clone(), prefs)?;
    spawn_console_reader(event_tx);

    controller
        .binding_mut()
        .print_notice("Type to search addons; :enter, :open N, :theme light|dark, :quit");

    // Single UI thread: every state change happens here, one event at a time.
    for event in event_rx {
        let effects = match event {
            AppEvent::Console(ConsoleCommand::Quit) => break,
            AppEvent::Console(command) => handle_command(&mut controller, command),
            AppEvent::Engine(msg) => controller.dispatch(msg),
        };
        controller.binding_mut().flush_frame();
        runner.run(effects);
    }

    finder_info!("Console closed, shutting down");
    Ok(())
}

fn handle_command(controller: &mut Controller, command: ConsoleCommand) -> Vec<finder_core::Effect> {
    match command {
        ConsoleCommand::Input(text) => {
            controller.binding_mut().set_input(text);
            controller.on_input()
        }
        ConsoleCommand::Key(key) => controller.on_keydown(key),
        ConsoleCommand::OpenRow(index) => controller.dispatch(Msg::RowActivated { index }),
        ConsoleCommand::Theme { light } => controller.dispatch(Msg::ThemeToggled { checked: light }),
        ConsoleCommand::Unknown(line) => {
            finder_warn!("Unknown console command {:?}", line);
            controller
                .binding_mut()
                .print_notice(&format!("unknown command: {line}"));
            Vec::new()
        }
        ConsoleCommand::Quit => Vec::new(),
    }
}

fn spawn_console_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let command = match line {
                Ok(line) => parse_line(&line),
                Err(err) => {
                    finder_warn!("Failed to read console input: {}", err);
                    ConsoleCommand::Quit
                }
            };
            let quit = command == ConsoleCommand::Quit;
            if event_tx.send(AppEvent::Console(command)).is_err() || quit {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Console(ConsoleCommand::Quit));
    });
}
