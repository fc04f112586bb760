use chrono::NaiveDate;

/// A loan issued to a user, with principal ("body") and interest
/// terms ("percent", a rate in percent).
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub id: i64,
    pub user_id: i64,
    pub issuance_date: NaiveDate,
    /// Scheduled return date
    pub return_date: NaiveDate,
    /// Set once the credit is repaid; `None` while open
    pub actual_return_date: Option<NaiveDate>,
    pub body: f64,
    pub percent: f64,
}

impl Credit {
    pub fn is_closed(&self) -> bool {
        self.actual_return_date.is_some()
    }

    /// Interest owed on the principal: percent / 100 * body
    pub fn accrued_interest(&self) -> f64 {
        self.percent / 100.0 * self.body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCredit {
    pub user_id: i64,
    pub issuance_date: NaiveDate,
    pub return_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub body: f64,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credit(actual_return_date: Option<NaiveDate>) -> Credit {
        Credit {
            id: 1,
            user_id: 1,
            issuance_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            actual_return_date,
            body: 1000.0,
            percent: 12.5,
        }
    }

    #[test]
    fn test_is_closed_follows_actual_return_date() {
        assert!(!credit(None).is_closed());
        assert!(credit(NaiveDate::from_ymd_opt(2024, 6, 1)).is_closed());
    }

    #[test]
    fn test_accrued_interest() {
        assert_eq!(credit(None).accrued_interest(), 125.0);
    }
}
