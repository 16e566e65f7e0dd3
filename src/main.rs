use std::path::PathBuf;
use std::time::Duration;

use bubbletop::app::App;
use bubbletop::config::{self, load_config, load_config_from_path};
use bubbletop::event::{Event, EventHandler, Sampler};
use bubbletop::ui;
use clap::Parser;
use color_eyre::Result;

#[derive(Parser)]
#[command(
    name = "bubbletop",
    about = "TUI process monitor with bubble visualization"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Initial sort mode: cpu, memory, threads
    #[arg(long)]
    sort: Option<String>,

    /// Initial bubble cap
    #[arg(long)]
    max_bubbles: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let mut app = App::new(config);
    let mut events = EventHandler::new(tick_rate);
    let sampler = Sampler::spawn(events.sender());

    // First batch before the first tick fires.
    sampler.request();
    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                    }
                }
                Event::Tick => sampler.request(),
                Event::Resize => {}
                Event::Batch(samples) => app.on_batch(samples),
                Event::BatchFailed(err) => app.on_batch_failed(err),
            }
            // Layout is stateless and recomputed per frame, so a resize
            // needs nothing beyond this redraw.
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(max) = cli.max_bubbles {
        config.general.max_bubbles = max;
    }

    config
}
