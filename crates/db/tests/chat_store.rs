//! Integration tests for conversations, participants, and the message log.

mod common;

use casebridge_db::models::user::UserRole;
use casebridge_db::repositories::{ConversationRepo, MessageRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_two_party_lookup_is_order_insensitive(pool: PgPool) {
    let alice = common::create_user(&pool, "alice@test.local", UserRole::Client).await;
    let bob = common::create_user(&pool, "bob@test.local", UserRole::Lawyer).await;

    assert!(ConversationRepo::find_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap()
        .is_none());

    let conversation = ConversationRepo::create_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap();

    let found = ConversationRepo::find_two_party(&pool, bob.id, alice.id)
        .await
        .unwrap();
    assert_eq!(found, Some(conversation.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_pairs_do_not_collide(pool: PgPool) {
    let alice = common::create_user(&pool, "alice@test.local", UserRole::Client).await;
    let bob = common::create_user(&pool, "bob@test.local", UserRole::Lawyer).await;
    let carol = common::create_user(&pool, "carol@test.local", UserRole::Lawyer).await;

    let ab = ConversationRepo::create_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap();
    let ac = ConversationRepo::create_two_party(&pool, alice.id, carol.id)
        .await
        .unwrap();
    assert_ne!(ab.id, ac.id);

    // A lookup for one pair never returns the other pair's conversation.
    let found = ConversationRepo::find_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap();
    assert_eq!(found, Some(ab.id));
    assert!(ConversationRepo::find_two_party(&pool, bob.id, carol.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_participant_checks(pool: PgPool) {
    let alice = common::create_user(&pool, "alice@test.local", UserRole::Client).await;
    let bob = common::create_user(&pool, "bob@test.local", UserRole::Lawyer).await;
    let carol = common::create_user(&pool, "carol@test.local", UserRole::Client).await;

    let conversation = ConversationRepo::create_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap();

    assert!(ConversationRepo::exists(&pool, conversation.id).await.unwrap());
    assert!(!ConversationRepo::exists(&pool, conversation.id + 1000).await.unwrap());

    assert!(
        ConversationRepo::is_participant(&pool, conversation.id, alice.id)
            .await
            .unwrap()
    );
    assert!(
        !ConversationRepo::is_participant(&pool, conversation.id, carol.id)
            .await
            .unwrap()
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_messages_ordered_and_filtered(pool: PgPool) {
    let alice = common::create_user(&pool, "alice@test.local", UserRole::Client).await;
    let bob = common::create_user(&pool, "bob@test.local", UserRole::Lawyer).await;
    let conversation = ConversationRepo::create_two_party(&pool, alice.id, bob.id)
        .await
        .unwrap();

    let first = MessageRepo::create(&pool, conversation.id, alice.id, "first")
        .await
        .unwrap();
    MessageRepo::create(&pool, conversation.id, bob.id, "second")
        .await
        .unwrap();
    MessageRepo::create(&pool, conversation.id, alice.id, "third")
        .await
        .unwrap();

    let all = MessageRepo::list(&pool, conversation.id, None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].body, "first");
    assert_eq!(all[0].sender_email, "alice@test.local");
    assert_eq!(all[2].body, "third");

    // The since filter is exclusive of the given timestamp.
    let newer = MessageRepo::list(&pool, conversation.id, Some(first.sent_at))
        .await
        .unwrap();
    assert_eq!(newer.len(), 2);
    assert_eq!(newer[0].body, "second");
}
