use sharkdeal_api::CheapSharkClient;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let client = match env::var("SHARKDEAL_API_URL") {
        Ok(url) => CheapSharkClient::with_base_url(&url, Duration::from_secs(30)),
        Err(_) => CheapSharkClient::new(),
    };
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error creating client: {}", e);
            return;
        }
    };

    println!("Fetching deals under $15 from {}...\n", client.base_url());

    let stores = client.fetch_store_directory().await;
    let fetch = client.fetch_deals(15.0).await;

    if let Some(e) = fetch.error {
        eprintln!("Error fetching deals: {}", e);
        return;
    }

    println!("Found {} deals ({} stores):", fetch.deals.len(), stores.len());
    for (i, deal) in fetch.deals.iter().enumerate() {
        println!(
            "{}. {} - ${:.2} (was ${:.2}, -{}%) @ {}",
            i + 1,
            deal.title,
            deal.sale_price,
            deal.normal_price,
            deal.discount(),
            stores.name_of(&deal.store_id),
        );
    }
}
