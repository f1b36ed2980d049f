//! CLI walkthrough for the mocktodo stack.
//!
//! Runs the full read/write cycle against the mock data-access layer
//! through the query cache, with the production-like environment: real
//! simulated latency and the 5% injected failure rate. Transient failures
//! surface to this layer, which re-invokes explicitly, the same
//! retry-by-user shape the UI would have.
//!
//! Run with `RUST_LOG=debug` to watch the cache invalidations.

use anyhow::Result;
use mocktodo_api::{TodoApi, fixtures};
use mocktodo_core::{ApiEnvironment, ApiError, CreateTodoInput, UpdateTodoInput};
use mocktodo_queries::TodoQueries;
use std::future::Future;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Re-invokes a transiently failing call, like a user pressing "retry"
async fn with_retry<T, F, Fut>(mut call: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    loop {
        match call().await {
            Err(error) if error.is_transient() => {
                println!("  ! {error} (retrying)");
            }
            other => return other,
        }
    }
}

async fn print_list(queries: &TodoQueries) -> Result<(), ApiError> {
    let response = with_retry(|| queries.list()).await?;
    println!("\n{} todos:", response.total);
    for todo in &response.todos {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{}] {}", status, todo.title);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("=== Mocktodo Demo ===");

    let queries = TodoQueries::new(TodoApi::new(ApiEnvironment::default()));

    // First read populates the cache
    print_list(&queries).await?;

    // Second read is served from cache (no simulated latency)
    print_list(&queries).await?;
    println!("\nFetches so far: {}", queries.fetch_count());

    println!("\nCreating a todo...");
    let created = with_retry(|| queries.create(CreateTodoInput::new("牛乳を買う"))).await?;
    println!("  created {}", created.id);
    print_list(&queries).await?;

    println!("\nCompleting it...");
    let id = created.id.clone();
    with_retry(|| queries.toggle(&id)).await?;
    print_list(&queries).await?;

    println!("\nRenaming the seeded router todo...");
    let [router, ..] = fixtures::seed_ids();
    let patch = UpdateTodoInput::new().with_title("TanStack Routerを復習する");
    with_retry(|| queries.update(&router, patch.clone())).await?;
    let detail = with_retry(|| queries.detail(&router)).await?;
    println!("  now titled: {}", detail.title);

    println!("\nDeleting it...");
    with_retry(|| queries.delete(&router)).await?;
    print_list(&queries).await?;

    println!("\nTotal fetches: {}", queries.fetch_count());
    println!("\n=== Demo Complete ===");
    Ok(())
}
