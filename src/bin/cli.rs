//! Chat Relay - command line chat against a hosted model deployment
//!
//! Run with: cargo run --bin chat-relay

use anyhow::Context;
use chat_relay::{MessageRelay, RelaySettings};
use std::env;
use std::io::{self, BufRead, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Missing endpoint or API key aborts here, before any network activity
    let settings = RelaySettings::from_env()
        .context("relay settings are not configured properly")?;

    println!("💬 Chat Relay");
    println!("================================================");
    println!(
        "Deployment: {} @ {}",
        settings.deployment_name, settings.endpoint_url
    );
    println!("================================================\n");

    let relay = MessageRelay::new(settings);

    // Check if a message is provided as argument
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        let message = args[1..].join(" ");
        let reply = relay.send(&message).await?;
        println!("{}", reply);
        return Ok(());
    }

    // Interactive mode
    println!("Interactive mode. Type your message and press Enter.");
    println!("Type 'quit' or 'exit' to exit.\n");

    let stdin = io::stdin();
    loop {
        print!("📝 You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();

        if message.is_empty() {
            continue;
        }

        if message == "quit" || message == "exit" {
            println!("Goodbye! 👋");
            break;
        }

        let reply = relay.send(message).await?;
        println!("🤖 {}\n", reply);
    }

    Ok(())
}
