use cafe_likes::config::{Cli, Command};
use cafe_likes::models::{ButtonState, CafeId};
use cafe_likes::{bind, ClickEvent, Config, HttpLikesClient, LikeButton, LikeError, LikesApi};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from(&cli);
    info!(api_url = %config.api_url, "using likes api");

    if let Err(err) = run(cli.command, &config).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, config: &Config) -> Result<(), LikeError> {
    let api = Arc::new(HttpLikesClient::new(config)?);

    match command {
        Command::Status { cafe_id } => {
            let cafe_id = CafeId::parse(&cafe_id).ok_or(LikeError::MissingCafeId)?;
            let liked = api.like_status(&cafe_id).await?;
            println!("{}", ButtonState::from_liked(liked));
        }
        Command::Toggle { cafe_id } => {
            let cafe_id = CafeId::parse(&cafe_id).ok_or(LikeError::MissingCafeId)?;
            let initial = ButtonState::from_liked(api.like_status(&cafe_id).await?);
            let binding = bind(api, LikeButton::new(&cafe_id, initial).into_shared());

            let event = ClickEvent::from_button(&*binding.button().lock().await);
            let outcome = binding.dispatch(event).await??;
            info!(response = %outcome.response, "toggle complete");

            let button = binding.unbind();
            println!("{}", button.lock().await.to_html());
        }
    }

    Ok(())
}
