//! SOQL query examples
//!
//! This example demonstrates:
//! 1. Type-safe structs vs dynamic JSON (both patterns shown)
//! 2. Ordering, null priority and limits with `QueryBuilder`
//! 3. Discovery calls: API versions and the global describe
//!
//! Run with: cargo run --example queries

use forcelink::{Config, QueryBuilder, QueryResult, RestClient};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Contact {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "Email")]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== SOQL Query Examples ===\n");

    let client = RestClient::new(Config::from_env()?)?;

    example_typed_query(&client).await?;
    example_dynamic_query(&client).await?;
    example_statement_only();
    example_discovery(&client).await?;

    println!("\n✓ All query examples completed successfully!");

    Ok(())
}

/// Example 1: Typed records
async fn example_typed_query(client: &RestClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Typed Query");
    println!("----------------------");

    let query = QueryBuilder::new()
        .select(["Id", "LastName", "Email"])
        .from("Contact")
        .order_asc("LastName")
        .order_null_last()
        .limit(5);

    let result: QueryResult<Contact> = client.query_objects(query).await?;
    println!("✓ {} contacts in total, showing {}", result.total_size, result.records.len());
    for contact in &result.records {
        println!("  {} {} {:?}", contact.id, contact.last_name, contact.email);
    }
    println!();

    Ok(())
}

/// Example 2: Dynamic JSON with a filter
async fn example_dynamic_query(client: &RestClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Dynamic Query with WHERE");
    println!("------------------------------------");

    let query = QueryBuilder::new()
        .select(["Id", "Name"])
        .from("Account")
        .where_eq("Industry", "Technology")
        .limit(3);

    let result: QueryResult<serde_json::Value> = client.query_objects(query).await?;
    for account in &result.records {
        println!("  {}", account["Name"]);
    }
    println!();

    Ok(())
}

/// Example 3: Build a statement without sending it
fn example_statement_only() {
    println!("Example 3: Statement Assembly");
    println!("-----------------------------");

    let state = QueryBuilder::new()
        .select(["Id", "Name"])
        .from("Opportunity")
        .where_eq("IsClosed", false)
        .where_eq("Amount", 10000)
        .order_desc("CloseDate")
        .limit(20)
        .limit(0)
        .finish();

    println!("  {}", state.statement());
    println!();
}

/// Example 4: What the instance offers
async fn example_discovery(client: &RestClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: Discovery");
    println!("--------------------");

    let versions = client.versions().await?;
    if let Some(latest) = versions.last() {
        println!("✓ Newest API version on the instance: {} ({})", latest.version, latest.label);
    }

    let describe = client.describe_global().await?;
    let count = describe["sobjects"].as_array().map_or(0, Vec::len);
    println!("✓ {} object types visible", count);

    Ok(())
}
