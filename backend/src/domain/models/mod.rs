pub mod credit;
pub mod payment;
pub mod plan;
pub mod user;

pub use credit::{Credit, NewCredit};
pub use payment::NewPayment;
pub use plan::{
    Category, NewPlan, Plan, PlanValidationError, CATEGORY_COLLECTION, CATEGORY_ISSUANCE,
};
pub use user::NewUser;
