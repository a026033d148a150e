//! Post store unit tests.

use user_posts_api::errors::AppError;
use user_posts_api::services::{PostService, PostStore, UserService, UserStore};

#[tokio::test]
async fn test_create_assigns_increasing_ids_from_one() {
    let store = PostStore::new();

    let first = store
        .create("T".to_string(), "C".to_string(), 1)
        .await
        .unwrap();
    let second = store
        .create("T2".to_string(), "C2".to_string(), 1)
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_create_rejects_empty_fields() {
    let store = PostStore::new();

    let no_title = store.create(String::new(), "body".to_string(), 1).await;
    assert!(matches!(no_title.unwrap_err(), AppError::Validation(_)));

    let no_content = store.create("title".to_string(), String::new(), 1).await;
    assert!(matches!(no_content.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_create_accepts_unknown_user_id() {
    let store = PostStore::new();

    // No user collection is consulted; any author id is accepted
    let id = store
        .create("Orphan".to_string(), "No such author".to_string(), 999)
        .await
        .unwrap();

    let post = store.find_by_id(id).await.unwrap();
    assert_eq!(post.user_id, 999);
}

#[tokio::test]
async fn test_list_empty_store_returns_empty_vec() {
    let store = PostStore::new();
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn test_find_by_id() {
    let store = PostStore::new();

    let id = store
        .create("Title".to_string(), "Content".to_string(), 1)
        .await
        .unwrap();

    let post = store.find_by_id(id).await.unwrap();
    assert_eq!(post.title, "Title");
    assert_eq!(post.content, "Content");

    assert!(matches!(
        store.find_by_id(999).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_find_by_user_id_filters_and_preserves_order() {
    let store = PostStore::new();

    store
        .create("T".to_string(), "C".to_string(), 1)
        .await
        .unwrap();
    store
        .create("T2".to_string(), "C2".to_string(), 2)
        .await
        .unwrap();
    store
        .create("T3".to_string(), "C3".to_string(), 1)
        .await
        .unwrap();

    let posts = store.find_by_user_id(1).await;
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["T", "T3"]);

    // Unused author id yields an empty vec, never an error
    assert!(store.find_by_user_id(42).await.is_empty());
}

#[tokio::test]
async fn test_delete_semantics() {
    let store = PostStore::new();

    let id = store
        .create("T".to_string(), "C".to_string(), 1)
        .await
        .unwrap();

    assert!(store.delete(id).await);
    assert!(!store.delete(id).await);
    assert!(matches!(
        store.find_by_id(id).await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_users_and_posts_scenario() {
    let users = UserStore::new();
    let posts = PostStore::new();

    let alice = users
        .register("Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(alice, 1);

    assert_eq!(
        posts
            .create("T".to_string(), "C".to_string(), alice)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        posts
            .create("T2".to_string(), "C2".to_string(), alice)
            .await
            .unwrap(),
        2
    );
    assert_eq!(
        posts
            .create("T3".to_string(), "C3".to_string(), 2)
            .await
            .unwrap(),
        3
    );

    let alice_posts = posts.find_by_user_id(alice).await;
    assert_eq!(
        alice_posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let other_posts = posts.find_by_user_id(2).await;
    assert_eq!(other_posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);

    assert!(posts.delete(1).await);
    assert_eq!(
        posts.list().await.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![2, 3]
    );
    assert!(!posts.delete(1).await);
}
