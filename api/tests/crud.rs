//! Integration tests for the data-access operations.
//!
//! All tests run against a deterministic environment (fixed or stepping
//! clock, scripted failure policy, zero latency) so nothing here depends on
//! wall-clock time or the random source.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use mocktodo_api::{TodoApi, TodoStore, fixtures};
use mocktodo_core::environment::NeverFail;
use mocktodo_core::{
    ApiEnvironment, CreateTodoInput, LatencyProfile, Todo, TodoId, UpdateTodoInput,
};
use mocktodo_testing::mocks::{AlwaysFail, FailNth, SteppingClock};
use mocktodo_testing::{assertions, test_environment, test_time};
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn stepping_environment() -> ApiEnvironment {
    ApiEnvironment::new(
        Arc::new(SteppingClock::new(test_time(), chrono::Duration::seconds(1))),
        Arc::new(NeverFail),
        LatencyProfile::none(),
    )
}

fn router_id() -> TodoId {
    let [router, ..] = fixtures::seed_ids();
    router
}

// ============================================================================
// create
// ============================================================================

#[tokio::test]
async fn create_yields_pending_entity_with_echoed_input() {
    let api = TodoApi::new(test_environment());

    let todo = api
        .create(CreateTodoInput::new("New TODO").with_description("New description"))
        .await
        .unwrap();

    assert_eq!(todo.title, "New TODO");
    assert_eq!(todo.description.as_deref(), Some("New description"));
    assert!(!todo.completed);
    assert_eq!(todo.created_at, test_time());
    assert_eq!(todo.updated_at, test_time());
}

#[tokio::test]
async fn create_increases_list_total_by_one() {
    let api = TodoApi::new(test_environment());
    let before = api.list().await.unwrap().total;

    api.create(CreateTodoInput::new("New TODO")).await.unwrap();

    assert_eq!(api.list().await.unwrap().total, before + 1);
}

#[tokio::test]
async fn create_assigns_a_fresh_id() {
    let api = TodoApi::new(test_environment());

    let first = api.create(CreateTodoInput::new("One")).await.unwrap();
    let second = api.create(CreateTodoInput::new("Two")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(!fixtures::seed_ids().contains(&first.id));
}

#[tokio::test]
async fn create_rejects_invalid_input_before_mutation() {
    let store = TodoStore::with_fixtures();
    let api = TodoApi::with_store(store.clone(), test_environment());

    let result = api.create(CreateTodoInput::new("")).await;

    assertions::assert_validation_error(&result, "title");
    assert_eq!(store.len(), 3);
}

// ============================================================================
// list
// ============================================================================

#[tokio::test]
async fn list_orders_by_created_at_descending() {
    let api = TodoApi::new(test_environment());

    let response = api.list().await.unwrap();

    let [router, query, form] = fixtures::seed_ids();
    let ids: Vec<TodoId> = response.todos.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec![form, query, router]);
    assert_eq!(response.total, 3);
}

#[tokio::test]
async fn list_puts_a_new_todo_first() {
    // The test clock is later than every fixture date
    let api = TodoApi::new(test_environment());

    let created = api.create(CreateTodoInput::new("Newest")).await.unwrap();
    let response = api.list().await.unwrap();

    assert_eq!(response.todos[0].id, created.id);
    assert_eq!(response.total, 4);
}

#[tokio::test]
async fn list_breaks_created_at_ties_by_insertion_order() {
    let first = Todo::new(TodoId::new(), "First in".to_string(), None, test_time());
    let second = Todo::new(TodoId::new(), "Second in".to_string(), None, test_time());
    let store = TodoStore::from_todos(vec![first.clone(), second.clone()]);
    let api = TodoApi::with_store(store, test_environment());

    let response = api.list().await.unwrap();

    assert_eq!(response.todos[0].id, first.id);
    assert_eq!(response.todos[1].id, second.id);
}

// ============================================================================
// get
// ============================================================================

#[tokio::test]
async fn get_returns_the_matching_entity() {
    let api = TodoApi::new(test_environment());

    let todo = api.get(&router_id()).await.unwrap();

    assert_eq!(todo.id, router_id());
    assert_eq!(todo.title, "TanStack Routerを学ぶ");
}

#[tokio::test]
async fn get_missing_id_is_not_found() {
    let api = TodoApi::new(test_environment());
    let id = TodoId::new();

    assertions::assert_not_found(&api.get(&id).await, &id);
}

// ============================================================================
// update
// ============================================================================

#[tokio::test]
async fn update_merges_patch_and_leaves_other_fields() {
    let api = TodoApi::new(stepping_environment());
    let before = api.get(&router_id()).await.unwrap();

    let updated = api
        .update(&router_id(), UpdateTodoInput::new().with_title("Updated title"))
        .await
        .unwrap();

    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.description, before.description);
    assert_eq!(updated.completed, before.completed);
    assert_eq!(updated.id, before.id);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at >= before.updated_at);
}

#[tokio::test]
async fn update_refreshes_updated_at() {
    let api = TodoApi::new(stepping_environment());
    let before = api.get(&router_id()).await.unwrap();

    let updated = api
        .update(&router_id(), UpdateTodoInput::new().with_title("Updated"))
        .await
        .unwrap();
    let again = api
        .update(&router_id(), UpdateTodoInput::new().with_completed(true))
        .await
        .unwrap();

    assert!(updated.updated_at >= before.updated_at);
    assert!(again.updated_at > updated.updated_at);
}

#[tokio::test]
async fn update_missing_id_is_not_found() {
    let api = TodoApi::new(test_environment());
    let id = TodoId::new();

    let result = api
        .update(&id, UpdateTodoInput::new().with_title("Test"))
        .await;
    assertions::assert_not_found(&result, &id);
}

#[tokio::test]
async fn update_rejects_over_long_title() {
    let api = TodoApi::new(test_environment());

    let result = api
        .update(&router_id(), UpdateTodoInput::new().with_title("x".repeat(101)))
        .await;

    assertions::assert_validation_error(&result, "title");
    // The entity is untouched
    let todo = api.get(&router_id()).await.unwrap();
    assert_eq!(todo.title, "TanStack Routerを学ぶ");
}

// ============================================================================
// toggle
// ============================================================================

#[tokio::test]
async fn toggle_flips_completed_and_nothing_else() {
    let api = TodoApi::new(stepping_environment());
    let before = api.get(&router_id()).await.unwrap();

    let toggled = api.toggle(&router_id()).await.unwrap();

    assert_eq!(toggled.completed, !before.completed);
    assert_eq!(toggled.title, before.title);
    assert_eq!(toggled.description, before.description);
    assert_eq!(toggled.created_at, before.created_at);
    assert!(toggled.updated_at >= before.updated_at);
}

#[tokio::test]
async fn toggle_twice_round_trips() {
    let api = TodoApi::new(test_environment());
    let before = api.get(&router_id()).await.unwrap();

    api.toggle(&router_id()).await.unwrap();
    let after = api.toggle(&router_id()).await.unwrap();

    assert_eq!(after.completed, before.completed);
}

#[tokio::test]
async fn toggle_missing_id_is_not_found() {
    let api = TodoApi::new(test_environment());
    let id = TodoId::new();

    assertions::assert_not_found(&api.toggle(&id).await, &id);
}

// ============================================================================
// delete
// ============================================================================

#[tokio::test]
async fn delete_removes_the_entity() {
    let api = TodoApi::new(test_environment());

    api.delete(&router_id()).await.unwrap();

    assertions::assert_not_found(&api.get(&router_id()).await, &router_id());
    assert_eq!(api.list().await.unwrap().total, 2);
}

#[tokio::test]
async fn delete_missing_id_is_not_found() {
    let api = TodoApi::new(test_environment());
    let id = TodoId::new();

    assertions::assert_not_found(&api.delete(&id).await, &id);
}

// ============================================================================
// failure injection
// ============================================================================

#[tokio::test]
async fn injected_failure_surfaces_network_error_without_mutation() {
    let store = TodoStore::with_fixtures();
    let env = ApiEnvironment::new(
        Arc::new(mocktodo_testing::mocks::FixedClock::new(test_time())),
        Arc::new(AlwaysFail),
        LatencyProfile::none(),
    );
    let api = TodoApi::with_store(store.clone(), env);

    assertions::assert_network_error(&api.list().await);
    assertions::assert_network_error(&api.get(&router_id()).await);
    assertions::assert_network_error(&api.create(CreateTodoInput::new("New")).await);
    assertions::assert_network_error(
        &api.update(&router_id(), UpdateTodoInput::new().with_completed(true))
            .await,
    );
    assertions::assert_network_error(&api.delete(&router_id()).await);
    assertions::assert_network_error(&api.toggle(&router_id()).await);

    assert_eq!(store.snapshot(), fixtures::seed());
}

#[tokio::test]
async fn failure_draw_happens_before_the_not_found_check() {
    let env = ApiEnvironment::new(
        Arc::new(mocktodo_testing::mocks::FixedClock::new(test_time())),
        Arc::new(AlwaysFail),
        LatencyProfile::none(),
    );
    let api = TodoApi::new(env);

    // An absent id behind a failing network reports the network error
    assertions::assert_network_error(&api.get(&TodoId::new()).await);
}

#[tokio::test]
async fn caller_retry_after_transient_failure_succeeds() {
    let env = ApiEnvironment::new(
        Arc::new(mocktodo_testing::mocks::FixedClock::new(test_time())),
        Arc::new(FailNth::new(0)),
        LatencyProfile::none(),
    );
    let api = TodoApi::new(env);

    assertions::assert_network_error(&api.create(CreateTodoInput::new("New")).await);

    // No automatic retry happened: the caller re-invokes explicitly
    let todo = api.create(CreateTodoInput::new("New")).await.unwrap();
    assert_eq!(todo.title, "New");
    assert_eq!(api.list().await.unwrap().total, 4);
}

// ============================================================================
// reset + full walkthrough
// ============================================================================

#[tokio::test]
async fn reset_restores_the_fixture_state() {
    let api = TodoApi::new(test_environment());
    api.delete(&router_id()).await.unwrap();
    api.create(CreateTodoInput::new("Extra")).await.unwrap();

    api.reset();

    let response = api.list().await.unwrap();
    assert_eq!(response.total, 3);
    assert!(response.todos.iter().any(|t| t.id == router_id()));
}

#[tokio::test]
async fn fixture_scenario_walkthrough() {
    let api = TodoApi::new(test_environment());
    let [router, query, form] = fixtures::seed_ids();

    // Seeded: three entities, newest first
    let response = api.list().await.unwrap();
    assert_eq!(response.total, 3);
    let ids: Vec<TodoId> = response.todos.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec![form, query, router.clone()]);

    assert_eq!(
        api.get(&router).await.unwrap().title,
        "TanStack Routerを学ぶ"
    );

    api.create(CreateTodoInput::new("New TODO")).await.unwrap();
    assert_eq!(api.list().await.unwrap().total, 4);

    // Fresh seed, as between test cases
    api.reset();

    api.delete(&router).await.unwrap();
    assert_eq!(api.list().await.unwrap().total, 2);
    assertions::assert_not_found(&api.get(&router).await, &router);
}
