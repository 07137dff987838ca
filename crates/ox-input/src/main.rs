//! ox-input demo host: a single text input control in the terminal.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_render::{Canvas, writer::Writer};
use core_terminal::{CrosstermBackend, TerminalBackend, translate};
use core_widget::InputOption;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod app;

use app::{App, Flow};

/// CLI arguments. Flags override the settings file.
#[derive(Parser, Debug)]
#[command(name = "ox-input", version, about = "Terminal text input demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `ox-input.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub multiline: bool,
    /// Mask the content.
    #[arg(long)]
    pub password: bool,
    #[arg(long)]
    pub placeholder: Option<String>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("ox-input.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "ox-input.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn build_option(args: &Args) -> Result<InputOption> {
    let cfg = load_from(args.config.clone())?;
    let mut option = InputOption::from_settings(&cfg.file.input)?;
    option.multiline |= args.multiline;
    option.password |= args.password;
    if let Some(p) = &args.placeholder {
        option.placeholder.set(p.as_str());
    }
    info!(
        target: "runtime",
        config = cfg.source.as_ref().map(|p| p.display().to_string()).as_deref(),
        multiline = option.multiline,
        password = option.password,
        "option_ready"
    );
    Ok(option)
}

fn draw(app: &mut App, out: &mut impl Write) -> Result<()> {
    let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
    let frame = Canvas::render(&app.view(), width, height);
    let mut writer = Writer::new();
    writer.paint(&frame, 0);
    writer.flush(out)
}

fn run(app: &mut App) -> Result<()> {
    let mut out = stdout();
    draw(app, &mut out)?;
    loop {
        let raw = crossterm::event::read().context("reading terminal event")?;
        let Some(event) = translate(&raw) else {
            continue;
        };
        if app.handle(&event) == Flow::Quit {
            info!(target: "runtime", changes = app.changes(), enters = app.enters(), focused = app.focused(), hovered = app.input().hovered(), "quit");
            return Ok(());
        }
        draw(app, &mut out)?;
    }
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let mut app = App::new(build_option(&args)?);

    let mut backend = CrosstermBackend::new();
    backend.set_title("ox-input")?;
    let _guard = backend.enter_guard().context("entering raw terminal mode")?;
    run(&mut app)
}
