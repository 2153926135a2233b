// Portfolio Assistant terminal front-end
// Chat with the keyword assistant, or try the loopback call demo.

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use portfolio_assistant_core::call::{CallSession, MockMediaProvider};
use portfolio_assistant_core::chat::{ChatMessage, ChatSession};
use portfolio_assistant_core::config::AppConfig;
use portfolio_assistant_core::error::AppError;
use portfolio_assistant_core::logging;

const APP_NAME: &str = "portfolio-assistant";

const USAGE: &str = "Ask about Sara's skills, projects, or experience...\n\
Commands: /call (video call demo), /history, /quit";

fn print_message(message: &ChatMessage) {
    println!("[{}] {}:", message.display_time(), message.sender);
    for line in message.text.lines() {
        println!("  {}", line);
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

async fn run_call_demo() -> Result<(), AppError> {
    let mut call = CallSession::new(MockMediaProvider::granting());
    println!("  {}", call.state());

    call.start().await?;
    println!("  {}", call.state());
    call.answer()?;
    println!("  {} (answered locally, no remote peer)", call.state());

    call.hang_up().await?;
    println!("  {}", call.state());
    call.reset()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    if let Err(e) = logging::init(APP_NAME, config.log_json) {
        eprintln!("{}", e);
    }

    let catalog = config.catalog().context("Failed to load intent catalog")?;
    let welcome = catalog.welcome.clone();
    let classifier = Arc::new(
        config
            .classifier(catalog)
            .context("Invalid intent catalog")?,
    );
    info!(
        categories = classifier.table().categories().len(),
        keywords = classifier.table().keyword_count(),
        "Assistant ready"
    );

    let chat = ChatSession::new(classifier, &welcome, config.typing_delay);
    chat.open();

    println!("{}", USAGE);
    for message in chat.messages() {
        print_message(&message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/history" => {
                for message in chat.messages() {
                    print_message(&message);
                }
            }
            "/call" => {
                if let Err(e) = run_call_demo().await {
                    error!("Call demo failed: {}", e);
                    println!("  {}", e);
                }
            }
            _ => {
                println!("  ...");
                match chat.send(&line).await {
                    Ok(reply) => print_message(&reply),
                    Err(AppError::Validation(msg)) => println!("  {}", msg),
                    Err(e) => error!("Failed to send message: {}", e),
                }
            }
        }
        prompt();
    }

    chat.close();
    Ok(())
}
