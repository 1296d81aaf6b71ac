mod cli;

use std::io::{BufRead, Write};

use rostrum_ai::{DebateService, GeminiClient, GeminiConfig, Mode};
use rostrum_common::SessionId;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root -- two levels up from crates/rostrum-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    load_dotenv();

    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("rostrum=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "rostrum=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Rostrum v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let config = match &args.config {
        Some(path) => rostrum_config::load_config_from(std::path::Path::new(path)),
        None => rostrum_config::load_config(),
    }
    .unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = rostrum_config::RostrumConfig::default();
        config.ai.api_key = std::env::var(rostrum_config::API_KEY_ENV).ok();
        config
    });
    tracing::info!("Config loaded (model: {})", config.ai.model);

    // Build the Gemini client; a missing credential is fatal
    let gemini = GeminiConfig::new(config.ai.api_key.clone().unwrap_or_default())
        .with_model(config.ai.model.clone())
        .with_max_tokens(config.ai.max_tokens)
        .with_temperature(config.ai.temperature);
    let client = match GeminiClient::new(gemini) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let mode = Mode::parse(&args.mode);
    let mut service = DebateService::new();
    let mut session_id: Option<SessionId> = args.session.as_deref().map(SessionId::from);

    println!("Rostrum — DebateMaster (mode {})", mode.label());
    println!("Commandes : /clear efface la session, /quit quitte.");
    if mode == Mode::Score {
        println!("Dis « fin du débat » pour recevoir le rapport final.");
    }

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                tracing::error!("stdin error: {e}");
                break;
            }
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        match message {
            "/quit" | "/exit" => break,
            "/clear" => {
                if let Some(id) = &session_id {
                    service.clear_session(id);
                    println!("(session effacée)");
                }
                continue;
            }
            _ => {}
        }

        match service
            .generate_response(&client, message, mode, session_id.as_ref())
            .await
        {
            Ok(reply) => {
                println!("{}\n", reply.text);
                if session_id.is_none() {
                    tracing::info!("session started: {}", reply.session_id);
                }
                session_id = Some(reply.session_id);
            }
            Err(e) => tracing::error!("{e}"),
        }
    }

    tracing::info!("Shutdown complete");
}
