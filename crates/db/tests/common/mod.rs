#![allow(dead_code)]

use casebridge_db::models::client_profile::{ClientProfile, CreateClientProfile};
use casebridge_db::models::lawyer_profile::{CreateLawyerProfile, LawyerProfile};
use casebridge_db::models::user::{CreateUser, User, UserRole};
use casebridge_db::repositories::{ClientProfileRepo, LawyerProfileRepo, UserRepo};
use sqlx::PgPool;

pub async fn create_user(pool: &PgPool, email: &str, role: UserRole) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role,
        },
    )
    .await
    .expect("user insert should succeed")
}

pub async fn create_client(pool: &PgPool, email: &str) -> ClientProfile {
    let user = create_user(pool, email, UserRole::Client).await;
    ClientProfileRepo::create(
        pool,
        &CreateClientProfile {
            user_id: user.id,
            full_name: "Fixture Client".to_string(),
            address: "1 Fixture Road".to_string(),
            phone_number: "5550100".to_string(),
        },
    )
    .await
    .expect("client profile insert should succeed")
}

pub async fn create_lawyer(pool: &PgPool, email: &str, bar_number: &str) -> LawyerProfile {
    let user = create_user(pool, email, UserRole::Lawyer).await;
    LawyerProfileRepo::create(
        pool,
        &CreateLawyerProfile {
            user_id: user.id,
            full_name: "Fixture Lawyer".to_string(),
            bar_registration_number: bar_number.to_string(),
            specialization: "general".to_string(),
            experience_years: "0-2".to_string(),
            location: "Fixture City".to_string(),
            bio: String::new(),
        },
    )
    .await
    .expect("lawyer profile insert should succeed")
}
