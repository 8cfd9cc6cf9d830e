//! Terminal gallery: browse cards and trigger the rotating audio clips.
//! Requires the `playback` feature (rodio output).

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use chimeboard::api_client::ApiClient;
use chimeboard::models::card::Card;
use chimeboard::player::rodio_backend::RodioBackend;
use chimeboard::player::Coordinator;

#[derive(Parser)]
#[command(name = "chime-gallery", about = "Browse chimeboard cards and play their clips")]
struct Cli {
    /// Origin server base URL
    #[arg(long, default_value = "http://127.0.0.1:8970")]
    server: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.server.trim_end_matches('/'));

    match run(&api).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &ApiClient) -> Result<(), String> {
    println!("loading…");
    let (cards, clips) = tokio::join!(api.list_cards(), api.list_audio());
    let cards = cards.map_err(|e| e.to_string())?;
    let clips = clips.map_err(|e| e.to_string())?;

    if cards.is_empty() {
        println!("no cards yet — add some with chime-admin");
        return Ok(());
    }

    // Pre-fetch every clip so starting playback never waits on the network.
    let mut clip_bytes = HashMap::new();
    for clip in &clips {
        match fetch_bytes(api, &clip.src).await {
            Ok(bytes) => {
                clip_bytes.insert(clip.id.clone(), bytes);
            }
            Err(e) => eprintln!("warning: could not fetch {}: {e}", clip.name),
        }
    }

    let backend = RodioBackend::new(clip_bytes).map_err(|e| e.to_string())?;
    let mut coordinator = Coordinator::with_clips(backend, clips);

    loop {
        coordinator.poll();
        render(&cards, coordinator.active_card());
        print!("card number to play, r to redraw, q to quit> ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        match input {
            "" | "r" => continue,
            "q" => break,
            _ => {
                let Some(card) = input
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| cards.get(i))
                else {
                    println!("unknown selection: {input}");
                    continue;
                };
                if let Err(e) = coordinator.select_card(&card.id) {
                    // The rotation has advanced anyway; just report it.
                    eprintln!("{e}");
                }
            }
        }
    }

    coordinator.stop();
    Ok(())
}

async fn fetch_bytes(api: &ApiClient, url: &str) -> Result<Vec<u8>, String> {
    let resp = api
        .http_client()
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("fetch returned {}", resp.status()));
    }
    Ok(resp.bytes().await.map_err(|e| e.to_string())?.to_vec())
}

fn render(cards: &[Card], active: Option<&str>) {
    println!();
    for (i, card) in cards.iter().enumerate() {
        let marker = if active == Some(card.id.as_str()) {
            "♪"
        } else {
            " "
        };
        let description = if card.description.is_empty() {
            "—"
        } else {
            card.description.as_str()
        };
        println!("{marker} {:>3}. {}  {}", i + 1, card.title, description);
    }
    println!();
}
