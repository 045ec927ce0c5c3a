//! Object CRUD example
//!
//! This example shows the same lifecycle two ways:
//! 1. Type-safe structs (recommended for production)
//! 2. Dynamic serde_json::Value (useful for exploration/prototyping)
//!
//! Configuration comes from the environment: SF_INSTANCE_URL, SF_CLIENT_ID,
//! SF_CLIENT_SECRET, SF_USERNAME, SF_PASSWORD and optionally
//! SF_TOKEN_LIFETIME / SF_API_VERSION.
//!
//! Run with: cargo run --example rest_crud

use forcelink::{Config, RestClient};
use serde::{Deserialize, Serialize};

/// Account record with proper type safety
#[derive(Debug, Serialize, Deserialize)]
struct Account {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Industry", skip_serializing_if = "Option::is_none")]
    industry: Option<String>,
    #[serde(rename = "Phone", skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Object CRUD Examples ===\n");

    let client = RestClient::new(Config::from_env()?)?;
    println!(
        "Using {} (API v{}.0)\n",
        client.host(),
        client.api_version()
    );

    println!("--- Type-Safe Struct Pattern ---\n");
    let account_id = example_create_typed(&client).await?;
    example_read_typed(&client, &account_id).await?;
    example_update(&client, &account_id).await?;

    println!("\n--- Dynamic JSON Pattern ---\n");
    let dynamic_id = example_create_dynamic(&client).await?;
    example_read_dynamic(&client, &dynamic_id).await?;

    example_delete(&client, &account_id).await?;
    example_delete(&client, &dynamic_id).await?;

    example_service_error(&client).await;

    println!("\n✓ All CRUD examples completed successfully!");

    Ok(())
}

/// Example 1a: Create with type-safe struct
async fn example_create_typed(client: &RestClient) -> Result<String, Box<dyn std::error::Error>> {
    println!("Example 1a: Create with Type-Safe Struct");
    println!("------------------------------------------");

    let account = Account {
        id: None,
        name: "Acme Corporation".to_string(),
        industry: Some("Technology".to_string()),
        phone: Some("+1-555-0100".to_string()),
    };

    let id = client.create_object("Account", &account).await?;
    println!("✓ Created account with ID: {}", id);
    println!();

    Ok(id)
}

/// Example 1b: Create with dynamic JSON
async fn example_create_dynamic(client: &RestClient) -> Result<String, Box<dyn std::error::Error>> {
    println!("Example 1b: Create with Dynamic JSON");
    println!("--------------------------------------");

    let account = serde_json::json!({
        "Name": "Dynamic Industries",
        "Industry": "Technology"
    });

    let id = client.create_object("Account", &account).await?;
    println!("✓ Created account with ID: {}", id);
    println!();

    Ok(id)
}

/// Example 2a: Read with type-safe deserialization
async fn example_read_typed(
    client: &RestClient,
    account_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2a: Read with Type-Safe Struct");
    println!("----------------------------------------");

    let account: Account = client.get_object("Account", account_id).await?;

    println!("✓ Retrieved account:");
    println!("  ID: {:?}", account.id);
    println!("  Name: {}", account.name);
    println!("  Industry: {:?}", account.industry);
    println!("  Phone: {:?}", account.phone);
    println!();

    Ok(())
}

/// Example 2b: Read with dynamic JSON
async fn example_read_dynamic(
    client: &RestClient,
    account_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2b: Read with Dynamic JSON");
    println!("------------------------------------");

    let account: serde_json::Value = client.get_object("Account", account_id).await?;

    println!("✓ Retrieved account:");
    println!("  ID: {}", account["Id"]);
    println!("  Name: {}", account["Name"]);
    println!();

    Ok(())
}

/// Example 3: Update with partial data
async fn example_update(
    client: &RestClient,
    account_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Update Record");
    println!("------------------------");

    let updates = serde_json::json!({
        "Name": "Acme Corporation (Updated)",
        "Phone": "+1-555-0101"
    });

    client.update_object("Account", account_id, &updates).await?;
    println!("✓ Updated account {}", account_id);
    println!();

    Ok(())
}

/// Example 4: Delete
async fn example_delete(
    client: &RestClient,
    account_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    client.delete_object("Account", account_id).await?;
    println!("✓ Deleted account {}", account_id);
    Ok(())
}

/// Example 5: Inspect the errors the service reports
async fn example_service_error(client: &RestClient) {
    println!("\nExample 5: Service Errors");
    println!("-------------------------");

    match client
        .get_object::<serde_json::Value>("Account", "001000000000000AAA")
        .await
    {
        Ok(_) => println!("Unexpectedly found the record"),
        Err(err) => match err.service_response() {
            Some(response) => {
                println!("✓ Service answered {} {}", response.status, response.status_text);
                for error in &response.errors {
                    println!("  {}: {}", error.error_code, error.message);
                }
            }
            None => println!("Request failed before reaching the service: {}", err),
        },
    }
}
