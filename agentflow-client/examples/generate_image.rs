use agentflow_client::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🖼️ AgentFlow Image Generation Demo");
    println!("==================================\n");

    // 1. Read the webhook address from the environment
    let config = AppConfig::from_env();

    // 2. Build the client with the default retry policy (3 attempts)
    let client = ImageClient::new(&config);

    // 3. Generate an image for the prompt
    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "A lighthouse at dusk, watercolor style".to_string());
    println!("Prompt: {prompt}\n");

    match client.generate(&prompt, ImageOptions::default()).await {
        Ok(image) => {
            println!("✅ Generated '{}'", image.name);
            println!("   data URI length: {} bytes", image.src.len());
        }
        Err(err) => println!("❌ Generation failed: {err}"),
    }

    Ok(())
}
