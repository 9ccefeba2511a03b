//! Plan aggregate
//!
//! Contains the Plan entity, the proration pricing model, and the
//! repository interface.

pub mod model;
pub mod pricing;
pub mod repository;

pub use model::{NewPlan, Plan};
pub use pricing::{upgrade_price, BILLING_CYCLE_DAYS};
pub use repository::PlanRepository;
