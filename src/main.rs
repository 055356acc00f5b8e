use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use fkvim_demo::app::LogicThread;
use fkvim_demo::clock::SystemClock;
use fkvim_demo::config::Config;
use fkvim_demo::panels::Panels;
use fkvim_demo::render::{RenderState, FRAME_DURATION};
use fkvim_demo::{dlog, dlog_error, ui, Error, Result};

/// FKvim interactive demo - try the editor's modal keys in your terminal
#[derive(Parser, Debug)]
#[command(name = "fkvim-demo")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    FKVIM_DEMO_DEBUG=1     Enable debug logging (alternative to --debug)"
)]
pub struct Cli {
    /// Enable debug logging (writes to ~/.fkvim-demo/demo.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Read configuration from this file instead of ~/.fkvim-demo/config.toml
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory with <mode>.ans files overriding the built-in panel art
    #[arg(short = 'p', long, value_name = "DIR")]
    pub panels: Option<PathBuf>,

    /// Validate the configuration and panel art, print a summary and exit
    #[arg(long)]
    pub check_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fkvim_demo::log::init(cli.debug);

    if cli.debug {
        dlog!("FKvim demo starting (debug mode enabled)");
    } else {
        dlog!("FKvim demo starting");
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            dlog_error!("Failed to load config: {}", e);
            return Err(e);
        }
    };
    if let Some(dir) = &cli.panels {
        config.panels_dir = Some(dir.to_string_lossy().into_owned());
    }

    let panels = match Panels::load(config.panels_path().as_deref()) {
        Ok(panels) => panels,
        Err(e) => {
            dlog_error!("Failed to load panels: {}", e);
            return Err(e);
        }
    };

    if cli.check_config {
        print_summary(&config);
        return Ok(());
    }

    run_tui(config, Arc::new(panels))
}

fn print_summary(config: &Config) {
    println!("Configuration OK");
    println!("  chord timeout:   {:?}", config.chord_timeout());
    println!("  command timeout: {:?}", config.command_timeout());
    println!("  blink interval:  {:?}", config.blink_interval());
    println!("  tick interval:   {:?}", config.tick_interval());
    println!("  launch commands: {}", config.launch_commands.join(", "));
    match config.panels_path() {
        Some(dir) => println!("  panels:          {}", dir.display()),
        None => println!("  panels:          built-in"),
    }
}

fn run_tui(config: Config, panels: Arc<Panels>) -> Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let shutdown_clone = shutdown.clone();
    let logic_handle = thread::spawn(move || {
        LogicThread::run(
            config,
            panels,
            Arc::new(SystemClock),
            state_tx,
            shutdown_clone,
        )
    });

    let mut terminal = setup_terminal()?;
    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle
        .join()
        .map_err(|_| Error::TaskJoin("logic thread panicked".to_string()));
    restore_terminal(&mut terminal)?;

    dlog!("FKvim demo exiting");
    result?;
    logic_result?
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
