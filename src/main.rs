use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::time::sleep_until;
use tracing::info;

use tabpeek::app::action::Action;
use tabpeek::app::detector::TableDetector;
use tabpeek::app::effect::Effect;
use tabpeek::app::effect_runner::EffectRunner;
use tabpeek::app::folding::SectionFolder;
use tabpeek::app::ports::PayloadSource;
use tabpeek::app::reducer::reduce;
use tabpeek::app::render_schedule::next_deadline;
use tabpeek::app::state::AppState;
use tabpeek::domain::CandidateReason;
use tabpeek::error;
use tabpeek::infra::adapters::{ArboardClipboard, JsonFileSource};
use tabpeek::infra::config::load_viewer_config;
use tabpeek::logging;
use tabpeek::ui::adapters::TuiAdapter;
use tabpeek::ui::event::handler::handle_event;
use tabpeek::ui::tui::TuiRunner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse an exported table payload
    View {
        /// JSON payload written by the interpreter-side exporter
        payload: PathBuf,
        /// Title for the header; defaults to the file stem
        #[arg(long)]
        name: Option<String>,
        /// Config file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
        /// Log file instead of the default location
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// List identifiers in a script that probably hold tables
    Detect { file: PathBuf },
    /// List foldable comment-marker sections in a script
    Sections { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    match Args::parse().command {
        Command::View {
            payload,
            name,
            config,
            log_file,
        } => run_viewer(&payload, name, config.as_deref(), log_file.as_deref()).await,
        Command::Detect { file } => detect(&file),
        Command::Sections { file } => sections(&file),
    }
}

async fn run_viewer(
    payload: &Path,
    name: Option<String>,
    config_path: Option<&Path>,
    log_file: Option<&Path>,
) -> Result<()> {
    let log_path = logging::init(log_file)?;
    let config = load_viewer_config(config_path)?;
    info!(payload = %payload.display(), log = %log_path.display(), "Starting viewer");

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let source = Arc::new(JsonFileSource::new(payload));
    let label = name.unwrap_or_else(|| {
        payload
            .file_stem()
            .map_or_else(|| "table".to_string(), |s| s.to_string_lossy().into_owned())
    });
    let mut state = AppState::new(label, source.describe(), config);

    let effect_runner = EffectRunner::new(
        Arc::clone(&source) as _,
        Arc::new(ArboardClipboard::new()),
        action_tx.clone(),
    );

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    state.ui.terminal_height = initial_size.height;

    let _ = action_tx.send(Action::Load).await;

    let result = event_loop(&mut tui, &mut state, &effect_runner, &action_tx, &mut action_rx).await;

    tui.exit()?;
    result
}

async fn event_loop(
    tui: &mut TuiRunner,
    state: &mut AppState,
    effect_runner: &EffectRunner,
    action_tx: &mpsc::Sender<Action>,
    action_rx: &mut mpsc::Receiver<Action>,
) -> Result<()> {
    loop {
        let deadline = next_deadline(state);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, state);
                if !action.is_none() {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                let now = Instant::now();
                let mut effects = reduce(state, action, now);

                if state.render_dirty && !effects.iter().any(Effect::is_render) {
                    effects.push(Effect::Render);
                }

                let mut tui_adapter = TuiAdapter::new(tui);
                effect_runner.run(effects, &mut tui_adapter, state).await?;
                state.clear_dirty();
            }
            // Debounce or message deadline reached
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                let now = Instant::now();
                let mut effects = reduce(state, Action::Tick, now);
                if state.render_dirty {
                    effects.push(Effect::Render);
                }
                let mut tui_adapter = TuiAdapter::new(tui);
                effect_runner.run(effects, &mut tui_adapter, state).await?;
                state.clear_dirty();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn detect(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
    let detector = TableDetector::new()?;

    let mut out = stdout().lock();
    for candidate in detector.scan(&source) {
        let reason = match candidate.reason {
            CandidateReason::Name => "name",
            CandidateReason::Constructor => "constructor",
        };
        writeln!(out, "{}\t{}\t{}", candidate.line, candidate.name, reason)?;
    }
    Ok(())
}

fn sections(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read {}", file.display()))?;
    let folder = SectionFolder::new()?;

    let mut out = stdout().lock();
    for section in folder.fold_sections(&source) {
        writeln!(
            out,
            "{}-{}\t{}{}",
            section.start_line,
            section.end_line,
            "  ".repeat(section.level.saturating_sub(1)),
            section.title
        )?;
    }
    Ok(())
}
