//! Admin CLI: manage card and audio records, uploading binary assets
//! straight to the media host via the signed-parameter flow.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use chimeboard::api_client::ApiClient;
use chimeboard::media_host::{self, AssetKind};

#[derive(Parser)]
#[command(name = "chime-admin", about = "Manage chimeboard cards and audio clips")]
struct Cli {
    /// Origin server base URL
    #[arg(long, default_value = "http://127.0.0.1:8970")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List cards, newest first
    ListCards,
    /// Upload an image and create a card pointing at it
    AddCard {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Image file to upload
        #[arg(long)]
        image: PathBuf,
    },
    /// Delete a card by id
    DeleteCard {
        #[arg(long)]
        id: String,
    },
    /// List audio clips, newest first
    ListAudio,
    /// Upload an audio file and create a clip record pointing at it
    AddAudio {
        #[arg(long)]
        name: String,
        /// Audio file to upload
        #[arg(long)]
        file: PathBuf,
    },
    /// Delete an audio clip by id
    DeleteAudio {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let api = ApiClient::new(cli.server.trim_end_matches('/'));

    match run(&api, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), String> {
    match command {
        Command::ListCards => {
            let cards = api.list_cards().await.map_err(|e| e.to_string())?;
            if cards.is_empty() {
                println!("no cards");
            }
            for card in cards {
                println!("{}  {}  {}", card.id, card.title, card.image);
            }
            Ok(())
        }
        Command::AddCard {
            title,
            description,
            image,
        } => {
            // Validate locally before touching the network.
            let title = title.trim();
            if title.is_empty() {
                return Err("title must not be blank".to_string());
            }
            let url = upload_file(api, AssetKind::Image, &image).await?;
            let card = api
                .create_card(title, description.trim(), &url)
                .await
                .map_err(|e| e.to_string())?;
            println!("created card {} ({})", card.id, card.title);
            Ok(())
        }
        Command::DeleteCard { id } => {
            api.delete_card(id.trim()).await.map_err(|e| e.to_string())?;
            println!("deleted");
            Ok(())
        }
        Command::ListAudio => {
            let clips = api.list_audio().await.map_err(|e| e.to_string())?;
            if clips.is_empty() {
                println!("no audio clips");
            }
            for clip in clips {
                println!("{}  {}  {}", clip.id, clip.name, clip.src);
            }
            Ok(())
        }
        Command::AddAudio { name, file } => {
            let name = name.trim();
            if name.is_empty() {
                return Err("name must not be blank".to_string());
            }
            let url = upload_file(api, AssetKind::Audio, &file).await?;
            let clip = api
                .create_audio(name, &url)
                .await
                .map_err(|e| e.to_string())?;
            println!("created audio clip {} ({})", clip.id, clip.name);
            Ok(())
        }
        Command::DeleteAudio { id } => {
            api.delete_audio(id.trim()).await.map_err(|e| e.to_string())?;
            println!("deleted");
            Ok(())
        }
    }
}

/// Signed-upload flow: fetch one-time parameters from the origin, then post
/// the file directly to the media host. Returns the public asset URL.
async fn upload_file(api: &ApiClient, kind: AssetKind, path: &Path) -> Result<String, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("asset")
        .to_string();

    let params = api.upload_params(kind).await.map_err(|e| e.to_string())?;
    let url = media_host::upload_asset(api.http_client(), &file_name, bytes, &params)
        .await
        .map_err(|e| e.to_string())?;

    println!("uploaded {} -> {url}", path.display());
    Ok(url)
}
