use chrono::NaiveDate;

/// A payment to be recorded against a credit. Immutable once stored;
/// the reporting paths only ever read payments back as aggregates
/// (totals and counts), never as individual records.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub sum: f64,
    pub payment_date: NaiveDate,
    pub credit_id: i64,
    /// Category classifying the payment (dictionary id)
    pub type_id: i64,
}
