use anyhow::Result;
use matrimony_registry::{
    ExpiryEvictionConfig, ExpiryEvictionService, ProfileInput, ProfileRegistry,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let eviction_interval_secs = std::env::var("EVICTION_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);

    let metrics_interval_secs = std::env::var("METRICS_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300);

    let config = ExpiryEvictionConfig {
        eviction_interval: Duration::from_secs(eviction_interval_secs),
        metrics_interval: Duration::from_secs(metrics_interval_secs),
    };

    let registry = Arc::new(ProfileRegistry::new());
    let cancellation_token = CancellationToken::new();
    let task_tracker = TaskTracker::new();

    let eviction_service = Arc::new(ExpiryEvictionService::new(
        registry.clone(),
        config,
        cancellation_token.clone(),
    ));

    let service = eviction_service.clone();
    task_tracker.spawn(async move {
        service.run().await;
    });

    println!("\nMatrimony registry starting");
    println!("\nSubmit one JSON profile per line, for example:");
    println!(
        r#"{{"name":"Asha","date_of_birth":"2000-01-01","gender":"female","bio":"Reader","phone":"9876543210","subscription_months":"1"}}"#
    );
    println!("\nRegistration requirements:");
    println!("- Phone: exactly 10 digits");
    println!("- Age: 18 or older");
    println!("- Gender: male or female");
    println!("- Subscription: at least 1 month");
    println!("\nConfiguration:");
    println!("- Eviction pass: every {eviction_interval_secs}s");
    println!("- Metrics: every {metrics_interval_secs}s");
    println!("\nCtrl+C or end of input to stop.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, stopping services...");
                break;
            }

            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        handle_submission(&registry, line.trim());
                    }
                    Ok(None) => {
                        info!("Input closed, stopping services...");
                        break;
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        }
    }

    // Print the active set the way the listing view would render it.
    let profiles = registry.list();
    println!("{}", serde_json::to_string_pretty(&profiles)?);

    // Signal all services to shutdown
    cancellation_token.cancel();

    // Close the task tracker to prevent new tasks from being spawned
    task_tracker.close();

    match tokio::time::timeout(Duration::from_secs(5), task_tracker.wait()).await {
        Ok(()) => info!("All background tasks completed successfully"),
        Err(_) => error!("Timeout waiting for background tasks to complete"),
    }

    info!("Clean shutdown complete");

    Ok(())
}

fn handle_submission(registry: &ProfileRegistry, line: &str) {
    let input: ProfileInput = match serde_json::from_str(line) {
        Ok(input) => input,
        Err(e) => {
            println!(
                "{}",
                serde_json::json!({ "error": format!("invalid submission: {e}") })
            );
            return;
        }
    };

    match registry.register(&input) {
        Ok(profile) => match serde_json::to_string(&profile) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to encode profile: {}", e),
        },
        Err(e) => {
            println!("{}", serde_json::json!({ "error": e.to_string() }));
        }
    }
}
