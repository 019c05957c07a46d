//! Cascade behaviour when parent rows are removed.

mod common;

use casebridge_db::models::legal_case::CreateLegalCase;
use casebridge_db::repositories::{
    CaseDocumentRepo, ConversationRepo, HireRepo, LegalCaseRepo, MessageRepo,
};
use rust_decimal::Decimal;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleting_user_removes_profile_and_hires(pool: PgPool) {
    let client = common::create_client(&pool, "client@test.local").await;
    let lawyer = common::create_lawyer(&pool, "lawyer@test.local", "BAR-1").await;
    let hire = HireRepo::create(&pool, client.id, lawyer.id, Decimal::new(50000, 2), true)
        .await
        .unwrap();

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(client.user_id)
        .execute(&pool)
        .await
        .unwrap();

    let gone = HireRepo::find_by_id(&pool, hire.id).await.unwrap();
    assert!(gone.is_none());

    let profiles: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM client_profiles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(profiles.0, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleting_case_removes_documents(pool: PgPool) {
    let client = common::create_client(&pool, "client@test.local").await;
    let lawyer = common::create_lawyer(&pool, "lawyer@test.local", "BAR-1").await;

    let case = LegalCaseRepo::create(
        &pool,
        &CreateLegalCase {
            title: "State v. Example".to_string(),
            client_id: client.id,
            lawyer_id: lawyer.id,
            court: "District Court".to_string(),
            case_number: "CASE-1".to_string(),
            next_hearing: chrono::NaiveDate::from_ymd_opt(2026, 11, 20).unwrap(),
            status: None,
            priority: None,
        },
    )
    .await
    .unwrap();

    CaseDocumentRepo::create(&pool, case.id, "Exhibit A", "case_documents/a.pdf")
        .await
        .unwrap();

    sqlx::query("DELETE FROM legal_cases WHERE id = $1")
        .bind(case.id)
        .execute(&pool)
        .await
        .unwrap();

    let documents = CaseDocumentRepo::list_for_case(&pool, case.id).await.unwrap();
    assert!(documents.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleting_conversation_removes_messages(pool: PgPool) {
    let client = common::create_client(&pool, "client@test.local").await;
    let lawyer = common::create_lawyer(&pool, "lawyer@test.local", "BAR-1").await;

    let conversation = ConversationRepo::create_two_party(&pool, client.user_id, lawyer.user_id)
        .await
        .unwrap();
    MessageRepo::create(&pool, conversation.id, client.user_id, "hello")
        .await
        .unwrap();

    sqlx::query("DELETE FROM conversations WHERE id = $1")
        .bind(conversation.id)
        .execute(&pool)
        .await
        .unwrap();

    let messages: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(messages.0, 0);
    assert!(!ConversationRepo::exists(&pool, conversation.id).await.unwrap());
}
