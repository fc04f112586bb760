use chrono::NaiveDate;

/// A user record before it has been assigned an id by the store.
/// Users are created by external systems; reporting only ever reaches
/// them through their credits, so there is no read model here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub login: String,
    pub registration_date: NaiveDate,
}
