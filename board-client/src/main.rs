use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use board_core::SessionStore;
use board_client::{
    ApiClient, AuthController, Config, GamePage, LeaderboardController, LogNotifier, MemoryPage,
    Notifier, ScoreSubmitter, SessionBinder,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::new();
    info!("Using leaderboard API at {}", config.api_base_url);

    let api = Arc::new(ApiClient::new(&config)?);
    let page = Arc::new(MemoryPage::new());
    let page_dyn: Arc<dyn GamePage> = page.clone();
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let store = Arc::new(SessionStore::new());
    let binder = Arc::new(SessionBinder::new(store, page_dyn.clone()));

    let auth = AuthController::new(
        api.clone(),
        binder.clone(),
        notifier.clone(),
        page_dyn.clone(),
    );
    let leaderboard = LeaderboardController::new(api.clone(), notifier.clone(), page_dyn.clone());
    let submitter = ScoreSubmitter::new(api, binder, notifier);

    // Page-load flow: render rankings while revalidating any cookie session.
    let (_, probe) = tokio::join!(leaderboard.load_top(), auth.check_session());
    info!("Startup session check: {probe:?}");

    print_page(&page);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("register") => match (parts.next(), parts.next()) {
                (Some(username), Some(password)) => auth.register(username, password).await,
                _ => auth.register("", "").await,
            },
            Some("login") => match (parts.next(), parts.next()) {
                (Some(username), Some(password)) => auth.login(username, password).await,
                _ => auth.login("", "").await,
            },
            Some("logout") => auth.logout().await,
            Some("score") => match parts.next().and_then(|raw| raw.parse::<i64>().ok()) {
                Some(score) => submitter.submit(score).await,
                None => println!("usage: score <number>"),
            },
            Some("top") => {
                leaderboard.load_top().await;
                print_page(&page);
            }
            Some("all") => match leaderboard.load_all().await {
                Some(entries) => {
                    for (rank, entry) in entries.iter().enumerate() {
                        println!("{:>3}. {} ({} pts)", rank + 1, entry.username, entry.score);
                    }
                }
                None => println!("full ranking unavailable"),
            },
            Some("page") => print_page(&page),
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}

fn print_page(page: &MemoryPage) {
    let snapshot = page.snapshot();
    println!("player: {} (score {})", snapshot.username_label, snapshot.score_label);
    for (slot, display) in snapshot.podium.iter().enumerate() {
        if display.name.is_empty() {
            println!("  #{}: (empty)", slot + 1);
        } else {
            println!("  #{}: {} ({} pts)", slot + 1, display.name, display.score);
        }
    }
}

fn print_help() {
    println!("commands: register <user> <pass> | login <user> <pass> | logout");
    println!("          score <n> | top | all | page | help | quit");
}
