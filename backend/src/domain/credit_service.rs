//! Credit status reporting.

use chrono::{Local, NaiveDate};
use shared::CreditInfo;
use std::sync::Arc;
use tracing::info;

use crate::domain::models::Credit;
use crate::storage::{CreditStorage, PaymentStorage};

#[derive(Debug, thiserror::Error)]
pub enum CreditReportError {
    #[error("User not found or no credits available")]
    NoCredits,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Service producing per-credit status records for one user.
#[derive(Clone)]
pub struct CreditService {
    credits: Arc<dyn CreditStorage>,
    payments: Arc<dyn PaymentStorage>,
}

impl CreditService {
    pub fn new(credits: Arc<dyn CreditStorage>, payments: Arc<dyn PaymentStorage>) -> Self {
        Self { credits, payments }
    }

    /// One status record per credit the user owns. A user with zero
    /// credits is reported as not found.
    pub async fn user_credits(&self, user_id: i64) -> Result<Vec<CreditInfo>, CreditReportError> {
        let credits = self.credits.list_credits_for_user(user_id).await?;
        if credits.is_empty() {
            return Err(CreditReportError::NoCredits);
        }
        info!("Reporting status for {} credits of user {}", credits.len(), user_id);

        let today = Local::now().date_naive();
        let mut results = Vec::with_capacity(credits.len());
        for credit in &credits {
            // Total payments are only reported for closed credits
            let total_payments = if credit.is_closed() {
                Some(self.payments.total_for_credit(credit.id).await?)
            } else {
                None
            };
            results.push(status_record(credit, total_payments, today));
        }
        Ok(results)
    }
}

/// Build the status record for one credit.
///
/// Open credits report the scheduled return date, days overdue
/// relative to `today` (negative while not yet due) and a naive
/// principal/interest split derived from the credit terms, not from
/// the payment ledger.
fn status_record(credit: &Credit, total_payments: Option<f64>, today: NaiveDate) -> CreditInfo {
    let mut record = CreditInfo {
        issuance_date: credit.issuance_date,
        is_closed: credit.is_closed(),
        issuance_amount: credit.body,
        accrued_interest: credit.percent,
        actual_return_date: None,
        total_payments: None,
        return_date: None,
        overdue_days: None,
        principal_payments: None,
        interest_payments: None,
    };

    if credit.is_closed() {
        record.actual_return_date = credit.actual_return_date;
        record.total_payments = total_payments;
    } else {
        record.return_date = Some(credit.return_date);
        record.overdue_days = Some((today - credit.return_date).num_days());
        record.principal_payments = Some(credit.body);
        record.interest_payments = Some(credit.accrued_interest());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_fixtures::{collection_category_id, seed_credit, seed_payment, seed_user};
    use crate::storage::{CreditRepository, DbConnection, PaymentRepository};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service(db: &DbConnection) -> CreditService {
        CreditService::new(
            Arc::new(CreditRepository::new(db.clone())),
            Arc::new(PaymentRepository::new(db.clone())),
        )
    }

    #[test]
    fn test_status_record_for_open_credit() {
        let credit = Credit {
            id: 1,
            user_id: 1,
            issuance_date: date(2024, 1, 10),
            return_date: date(2024, 3, 10),
            actual_return_date: None,
            body: 2000.0,
            percent: 15.0,
        };

        let record = status_record(&credit, None, date(2024, 3, 15));
        assert!(!record.is_closed);
        assert_eq!(record.issuance_amount, 2000.0);
        assert_eq!(record.return_date, Some(date(2024, 3, 10)));
        assert_eq!(record.overdue_days, Some(5));
        assert_eq!(record.principal_payments, Some(2000.0));
        assert_eq!(record.interest_payments, Some(300.0));
        assert_eq!(record.actual_return_date, None);
        assert_eq!(record.total_payments, None);
    }

    #[test]
    fn test_status_record_not_yet_due_has_negative_overdue_days() {
        let credit = Credit {
            id: 1,
            user_id: 1,
            issuance_date: date(2024, 1, 10),
            return_date: date(2024, 7, 10),
            actual_return_date: None,
            body: 500.0,
            percent: 8.0,
        };

        let record = status_record(&credit, None, date(2024, 7, 1));
        assert_eq!(record.overdue_days, Some(-9));
    }

    #[test]
    fn test_status_record_for_closed_credit() {
        let credit = Credit {
            id: 1,
            user_id: 1,
            issuance_date: date(2024, 1, 10),
            return_date: date(2024, 7, 10),
            actual_return_date: Some(date(2024, 6, 20)),
            body: 500.0,
            percent: 8.0,
        };

        let record = status_record(&credit, Some(540.0), date(2024, 8, 1));
        assert!(record.is_closed);
        assert_eq!(record.actual_return_date, Some(date(2024, 6, 20)));
        assert_eq!(record.total_payments, Some(540.0));
        assert_eq!(record.return_date, None);
        assert_eq!(record.overdue_days, None);
        assert_eq!(record.principal_payments, None);
        assert_eq!(record.interest_payments, None);
    }

    #[tokio::test]
    async fn test_user_credits_returns_one_record_per_credit() {
        let db = DbConnection::init_test().await.unwrap();
        let user_id = seed_user(&db, "borrower").await;
        let open_id = seed_credit(&db, user_id, "2024-01-10", 1000.0, None).await;
        let closed_id = seed_credit(&db, user_id, "2024-02-01", 400.0, Some("2024-06-01")).await;
        let category = collection_category_id(&db).await;
        seed_payment(&db, closed_id, category, "2024-05-01", 440.0).await;
        // Payment on the open credit must not leak into a closed total
        seed_payment(&db, open_id, category, "2024-05-02", 99.0).await;

        let records = service(&db).user_credits(user_id).await.unwrap();
        assert_eq!(records.len(), 2);

        let open = records.iter().find(|r| !r.is_closed).unwrap();
        assert_eq!(open.issuance_amount, 1000.0);
        assert!(open.return_date.is_some());

        let closed = records.iter().find(|r| r.is_closed).unwrap();
        assert_eq!(closed.total_payments, Some(440.0));
    }

    #[tokio::test]
    async fn test_user_without_credits_is_not_found() {
        let db = DbConnection::init_test().await.unwrap();
        let user_id = seed_user(&db, "no-credits").await;

        let err = service(&db).user_credits(user_id).await.unwrap_err();
        assert!(matches!(err, CreditReportError::NoCredits));
    }
}
