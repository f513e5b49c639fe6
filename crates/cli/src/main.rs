use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{recommend, similar_users, DEFAULT_TOP_N};
use graph::{Node, RatingGraph};
use std::path::PathBuf;

/// cinegraph - collaborative-filtering movie recommendations
#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Movie recommendations from a user-movie rating graph", long_about = None)]
struct Cli {
    /// Path to the ratings CSV (User_ID, Movie_Title, Rating, Genre)
    #[arg(short, long, default_value = "ratings.csv")]
    ratings: PathBuf,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the users whose watch history most resembles a user's
    Similar {
        /// Target user id
        #[arg(long)]
        user: String,

        /// Number of similar users to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Recommend unseen movies for a user
    Recommend {
        /// Target user id
        #[arg(long)]
        user: String,

        /// Number of recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Show node and edge counts for the loaded graph
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let records = data_loader::load_ratings(&cli.ratings)
        .with_context(|| format!("Failed to load ratings from {}", cli.ratings.display()))?;
    let graph = RatingGraph::from_records(records);

    match cli.command {
        Commands::Similar { user, top_n } => handle_similar(&graph, &user, top_n, cli.json),
        Commands::Recommend { user, top_n } => handle_recommend(&graph, &user, top_n, cli.json),
        Commands::Stats => handle_stats(&graph, cli.json),
    }
}

/// Handle the 'similar' command
fn handle_similar(graph: &RatingGraph, user: &str, top_n: usize, json: bool) -> Result<()> {
    let matches = similar_users(graph, user, top_n);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}", format!("No similar users found for {user}").yellow());
        return Ok(());
    }

    println!("{}", format!("Users similar to {user}:").bold());
    for (rank, m) in matches.iter().enumerate() {
        println!(
            "  {}. {} {}",
            rank + 1,
            m.user_id.cyan(),
            format!("(similarity {:.3})", m.score).dimmed()
        );
    }
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(graph: &RatingGraph, user: &str, top_n: usize, json: bool) -> Result<()> {
    let recs = recommend(graph, user, top_n);

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
        return Ok(());
    }

    if recs.is_empty() {
        println!(
            "{}",
            format!("No recommendations possible for {user}").yellow()
        );
        return Ok(());
    }

    println!("{}", format!("Recommendations for {user}:").bold());
    for (rank, rec) in recs.iter().enumerate() {
        let genre = graph
            .node(&rec.title)
            .and_then(Node::genre)
            .unwrap_or("unknown");
        println!(
            "  {}. {} {} {}",
            rank + 1,
            rec.title.green(),
            format!("[{genre}]").blue(),
            format!("(score {:.3})", rec.score).dimmed()
        );
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(graph: &RatingGraph, json: bool) -> Result<()> {
    let (users, movies, edges) = graph.counts();

    if json {
        println!(
            "{}",
            serde_json::json!({ "users": users, "movies": movies, "ratings": edges })
        );
        return Ok(());
    }

    println!("{}", "Rating graph".bold());
    println!("  users:   {users}");
    println!("  movies:  {movies}");
    println!("  ratings: {edges}");
    Ok(())
}
