use agentflow_proxy::prelude::*;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("🛰️ AgentFlow Scrape Proxy Walkthrough");
    println!("=====================================\n");

    // 1. Configuration comes from the environment (MCP_PROXY_BASE)
    let config = AppConfig::from_env();
    let proxy = ScrapeProxy::new(&config);

    // 2. A preflight, as a browser would send before the POST
    let preflight = proxy.preflight();
    println!("OPTIONS -> {}", preflight.status());
    for (name, value) in preflight.headers() {
        println!("  {name}: {value}");
    }

    // 3. A request that fails validation: no upstream call is made
    let response = proxy.handle(br#"{"url": "not-a-url"}"#).await;
    println!("\nPOST {{\"url\": \"not-a-url\"}} -> {}", response.status());
    if let Some(body) = response.body() {
        println!("  {body}");
    }

    // 4. A well-formed request, forwarded if the service is configured
    let response = proxy.handle(br#"{"url": "https://example.com"}"#).await;
    println!("\nPOST {{\"url\": \"https://example.com\"}} -> {}", response.status());
    if let Some(body) = response.body() {
        println!("  {body}");
    }
}
