mod config;
mod events;
mod logging;
mod message;
mod model;
mod tasks;
mod update;
mod view;

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sharkdeal_api::CheapSharkClient;
use tracing::{info, warn};

use config::Config;
use message::Message;
use model::Model;
use tasks::TaskManager;

const EVENT_POLL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file = logging::init();
    let config = Config::load();
    info!(
        api = %config.api_base_url(),
        upper_price = config.upper_price,
        log = ?log_file,
        "starting sharkdeal"
    );

    let client = CheapSharkClient::with_base_url(&config.api_base_url(), config.request_timeout())?;
    let tasks = TaskManager::new(client, config.thumbnail_timeout());

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, Model::new(config), tasks).await;
    restore_terminal()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: Model,
    mut tasks: TaskManager,
) -> Result<()> {
    tasks::start_refresh(&mut model, &mut tasks);

    loop {
        terminal.draw(|frame| view::view(frame, &mut model))?;

        if model.should_quit {
            break;
        }

        for msg in tasks::check_tasks(&mut model, &mut tasks).await {
            process(&mut model, &mut tasks, msg);
        }

        let msg = events::handle_event(&model, EVENT_POLL)?.unwrap_or(Message::Tick);
        process(&mut model, &mut tasks, msg);
    }

    Ok(())
}

/// Run a message through update, following chained messages and side effects
fn process(model: &mut Model, tasks: &mut TaskManager, msg: Message) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let result = update::update(model, msg);
        if result.needs_save {
            if let Err(e) = model.config.save() {
                warn!(error = %e, "could not save config");
            }
        }
        if result.needs_reload {
            tasks::start_refresh(model, tasks);
        }
        next = result.msg;
    }
}
