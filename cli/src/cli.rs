use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "posts")]
#[command(about = "Typed client for the posts REST API", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "API base URL (overrides POSTS_API_BASE_URL)"
    )]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List all posts")]
    List,

    #[command(about = "Fetch one post")]
    Get {
        #[arg(help = "Post id")]
        id: u64,
    },

    #[command(about = "Create a post (the server assigns the id)")]
    Create {
        #[command(flatten)]
        fields: PostFields,
    },

    #[command(about = "Replace a post")]
    Update {
        #[arg(long, help = "Id of the post to replace")]
        id: u64,

        #[command(flatten)]
        fields: PostFields,
    },

    #[command(about = "Delete a post and print the echoed post")]
    Delete {
        #[arg(help = "Post id")]
        id: u64,
    },
}

#[derive(Args)]
pub struct PostFields {
    #[arg(long, help = "Author user id")]
    pub user_id: u64,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub body: String,
}
