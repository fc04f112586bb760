pub mod category_repository;
pub mod credit_repository;
pub mod payment_repository;
pub mod plan_repository;
pub mod user_repository;

pub use category_repository::CategoryRepository;
pub use credit_repository::CreditRepository;
pub use payment_repository::PaymentRepository;
pub use plan_repository::PlanRepository;
pub use user_repository::UserRepository;
