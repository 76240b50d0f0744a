/*
[INPUT]:  Panel API key (JAP_API_KEY environment variable)
[OUTPUT]: Service catalog and account balance printed to stdout
[POS]:    Examples - read-only panel queries
[UPDATE]: When catalog or balance endpoints change
*/

use jap_adapter::*;

/// Example: list the service catalog and check the balance
///
/// These actions only read account data; nothing is ordered.
#[tokio::main]
async fn main() {
    println!("=== Panel Catalog Example ===\n");

    let api_key = match std::env::var("JAP_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set JAP_API_KEY to your panel API key");
            return;
        }
    };

    let client = match PanelClient::new(api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created\n");

    println!("Fetching balance...");
    match client.get_user_balance().await {
        Ok(balance) => println!("✓ Balance: {} {}", balance.balance, balance.currency),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching service catalog...");
    match client.list_services().await {
        Ok(services) => {
            println!("✓ {} services available, first five:", services.len());
            for service in services.iter().take(5) {
                println!(
                    "  [{}] {} ({}): rate {} / min {} / max {}",
                    service.service,
                    service.name,
                    service.category,
                    service.rate,
                    service.min,
                    service.max
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Catalog example complete");
}
