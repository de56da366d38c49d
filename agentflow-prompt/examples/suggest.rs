use agentflow_prompt::prelude::*;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("💡 AgentFlow Prompt Suggestion Demo");
    println!("===================================\n");

    // 1. Pick the model from the environment (default gpt-4o-mini)
    let config = AppConfig::from_env();
    let generator = PromptGenerator::from_config(&config);

    // 2. Expand the topic into prompts
    let topic = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "urban gardening".to_string());
    println!("Topic: {topic}\n");

    match generator.suggest(&topic).await {
        Ok(prompts) => {
            for (i, prompt) in prompts.iter().enumerate() {
                println!("{}. {prompt}", i + 1);
            }
        }
        Err(err) => println!("❌ Suggestion failed: {err}"),
    }

    Ok(())
}
