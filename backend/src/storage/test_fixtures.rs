//! Seed helpers shared by storage and domain tests.
//!
//! Users, credits and payments are created by external systems in
//! production; tests seed them through the repositories directly.

use chrono::NaiveDate;

use crate::domain::models::{NewCredit, NewPayment, NewUser};
use crate::storage::connection::DbConnection;
use crate::storage::repositories::{
    CategoryRepository, CreditRepository, PaymentRepository, UserRepository,
};
use crate::storage::traits::{CategoryStorage, CreditStorage, PaymentStorage, UserStorage};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub async fn seed_user(db: &DbConnection, login: &str) -> i64 {
    UserRepository::new(db.clone())
        .store_user(&NewUser {
            login: login.to_string(),
            registration_date: date("2023-01-01"),
        })
        .await
        .unwrap()
}

/// Seed a credit issued on `issuance_date`, due six months later.
pub async fn seed_credit(
    db: &DbConnection,
    user_id: i64,
    issuance_date: &str,
    body: f64,
    actual_return_date: Option<&str>,
) -> i64 {
    let issued = date(issuance_date);
    CreditRepository::new(db.clone())
        .store_credit(&NewCredit {
            user_id,
            issuance_date: issued,
            return_date: issued + chrono::Months::new(6),
            actual_return_date: actual_return_date.map(date),
            body,
            percent: 10.0,
        })
        .await
        .unwrap()
}

pub async fn seed_payment(
    db: &DbConnection,
    credit_id: i64,
    type_id: i64,
    payment_date: &str,
    sum: f64,
) -> i64 {
    PaymentRepository::new(db.clone())
        .store_payment(&NewPayment {
            sum,
            payment_date: date(payment_date),
            credit_id,
            type_id,
        })
        .await
        .unwrap()
}

pub async fn issuance_category_id(db: &DbConnection) -> i64 {
    CategoryRepository::new(db.clone())
        .get_by_name("issuance")
        .await
        .unwrap()
        .unwrap()
        .id
}

pub async fn collection_category_id(db: &DbConnection) -> i64 {
    CategoryRepository::new(db.clone())
        .get_by_name("collection")
        .await
        .unwrap()
        .unwrap()
        .id
}
