use clap::Parser;

/// Rostrum — a debate-training chatbot over the Gemini API.
#[derive(Parser, Debug)]
#[command(name = "rostrum", version, about)]
pub struct Args {
    /// Conversation mode: "train" to practice, "score" to be evaluated.
    #[arg(short, long, default_value = "train")]
    pub mode: String,

    /// Resume an existing session id instead of starting fresh.
    #[arg(short, long)]
    pub session: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "rostrum=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
