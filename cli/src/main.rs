use anyhow::Result;
use clap::Parser as _;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use posts_core::{ClientConfig, Post, PostsClient};

mod cli;

use cli::{Cli, Commands, PostFields};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "posts_core=warn,posts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match cli.base_url.as_deref() {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    tracing::debug!(base_url = config.base_url(), "using API");
    let client = PostsClient::from_config(config);

    match cli.command {
        Commands::List => print_json(&client.get_post_list().await?),
        Commands::Get { id } => print_json(&client.get_post(id).await?),
        Commands::Create { fields } => print_json(&client.create_post(&to_post(0, fields)).await?),
        Commands::Update { id, fields } => {
            print_json(&client.update_post(&to_post(id, fields)).await?)
        }
        Commands::Delete { id } => print_json(&client.delete_post(id).await?),
    }
}

fn to_post(id: u64, fields: PostFields) -> Post {
    Post {
        user_id: fields.user_id,
        id,
        title: fields.title,
        body: fields.body,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
