//! Wallet activity viewer - Main executable
//!
//! Prints one page of the configured user's account activity, or the detail
//! of a single activity, using the wallet REST API.
use anyhow::{bail, Context};
use dotenv::dotenv;
use log::info;
use std::env;
use wallet_activity::{page_from_query, ActivityPresenter, Config, ServiceContainer};

enum Command {
    Page(i64),
    Detail(i64),
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    match args {
        [] => Ok(Command::Page(1)),
        [cmd, id] if cmd == "detail" => {
            let id = id
                .parse()
                .with_context(|| format!("Invalid activity id: {}", id))?;
            Ok(Command::Detail(id))
        }
        [page] if page.starts_with('?') || page.contains('=') => {
            Ok(Command::Page(page_from_query(Some(page))))
        }
        [page] => {
            let page = page
                .parse()
                .with_context(|| format!("Invalid page number: {}", page))?;
            Ok(Command::Page(page))
        }
        _ => bail!("Usage: wallet-activity [PAGE | ?page=N | detail ACTIVITY_ID]"),
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting wallet activity viewer v{}", wallet_activity::VERSION);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let config = Config::from_env();
    let user_id = config
        .user_id
        .context("WALLET_USER_ID must be set in environment variables")?;

    info!("Using wallet API at {}", config.api_base_url);
    let services = ServiceContainer::new(config);
    let presenter = services.activity_presenter(services.terminal_view());

    match command {
        Command::Page(page) => presenter.show_activity(user_id, page).await?,
        Command::Detail(id) => presenter.show_activity_detail(user_id, id).await?,
    }

    info!("Finished with state {:?}", presenter.state());
    Ok(())
}
