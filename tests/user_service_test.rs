//! User store unit tests.

use user_posts_api::errors::AppError;
use user_posts_api::services::{UserService, UserStore};

#[tokio::test]
async fn test_register_assigns_increasing_ids_from_one() {
    let store = UserStore::new();

    let first = store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let second = store
        .register("Bob".to_string(), "bob@example.com".to_string())
        .await
        .unwrap();
    let third = store
        .register("Carol".to_string(), "carol@example.com".to_string())
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(third, 3);
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let store = UserStore::new();

    let no_name = store
        .register(String::new(), "x@x.com".to_string())
        .await;
    assert!(matches!(no_name.unwrap_err(), AppError::Validation(_)));

    let no_email = store.register("x".to_string(), String::new()).await;
    assert!(matches!(no_email.unwrap_err(), AppError::Validation(_)));

    // Failed registrations must not consume ids
    let id = store
        .register("x".to_string(), "x@x.com".to_string())
        .await
        .unwrap();
    assert_eq!(id, 1);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let store = UserStore::new();

    store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    let result = store
        .register("Impostor".to_string(), "alice@example.com".to_string())
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    // The first registration is unaffected
    let users = store.list().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
}

#[tokio::test]
async fn test_email_match_is_case_sensitive() {
    let store = UserStore::new();

    store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    // Differently-cased address is a different email
    let result = store
        .register("Alice Again".to_string(), "Alice@Example.com".to_string())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let store = UserStore::new();
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let store = UserStore::new();

    for (name, email) in [
        ("Alice", "alice@example.com"),
        ("Bob", "bob@example.com"),
        ("Carol", "carol@example.com"),
    ] {
        store
            .register(name.to_string(), email.to_string())
            .await
            .unwrap();
    }

    let names: Vec<_> = store.list().await.into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn test_find_by_id() {
    let store = UserStore::new();

    let id = store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    let user = store.find_by_id(id).await.unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");

    let missing = store.find_by_id(999).await;
    assert!(matches!(missing.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_then_find_is_not_found() {
    let store = UserStore::new();

    let id = store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    assert!(store.delete(id).await);
    assert!(matches!(
        store.find_by_id(id).await.unwrap_err(),
        AppError::NotFound
    ));

    // Deleting again reports absence
    assert!(!store.delete(id).await);
}

#[tokio::test]
async fn test_delete_frees_email_but_never_the_id() {
    let store = UserStore::new();

    let first = store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    assert!(store.delete(first).await);

    // Same email may be registered again, but under a fresh id
    let second = store
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(second, 2);
    assert_ne!(second, first);
}
