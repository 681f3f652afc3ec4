use clap::Parser;
use deli_ordering::cli::Cli;
use deli_ordering::handlers::commands::execute;
use deli_ordering::{build_service, AppError, ClientConfig};
use dotenvy::dotenv;

async fn run(cli: Cli) -> Result<String, AppError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }

    log::debug!("Using API at {}", config.api_base_url);
    let mut service = build_service(&config)?;
    execute(&mut service, cli.command).await
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => print!("{}", ensure_newline(output)),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
