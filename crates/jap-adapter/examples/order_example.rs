/*
[INPUT]:  Panel API key, service id, link and quantity (command line)
[OUTPUT]: Placed order id and its current status
[POS]:    Examples - order placement and polling
[UPDATE]: When order endpoints change
*/

use jap_adapter::*;

/// Example: place an order and poll its status once
///
/// Usage: order_example <service> <link> <quantity>
///
/// WARNING: this spends real panel balance.
#[tokio::main]
async fn main() {
    println!("=== Panel Order Example ===\n");

    let api_key = match std::env::var("JAP_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set JAP_API_KEY to your panel API key");
            return;
        }
    };

    let args: Vec<String> = std::env::args().collect();
    let (service, link, quantity) = match (args.get(1), args.get(2), args.get(3)) {
        (Some(s), Some(l), Some(q)) => match q.parse::<u32>() {
            Ok(quantity) => (s.clone(), l.clone(), quantity),
            Err(_) => {
                eprintln!("Quantity must be a positive integer");
                return;
            }
        },
        _ => {
            eprintln!("Usage: order_example <service> <link> <quantity>");
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

    println!("Placing order: service {} x{} for {}", service, quantity, link);
    let order_id = match client.add_order(&service, &link, quantity, None, None).await {
        Ok(id) => {
            println!("✓ Order placed, id {}", id);
            id
        }
        Err(e) => {
            println!("✗ Order rejected: {}", e);
            return;
        }
    };

    println!("\nChecking status of order {}...", order_id);
    match client.get_order_status(&order_id).await {
        Ok(response) => match response.order_status.get(&order_id) {
            Some(status) => println!(
                "✓ Status: {} (charge {} {}, remains {})",
                status.status, status.charge, status.currency, status.remains
            ),
            None => println!("✗ Panel returned no entry for order {}", order_id),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Order example complete");
}
