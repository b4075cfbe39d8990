pub mod budget;
pub mod core;
pub mod referral;

pub use budget::QueryBudget;
pub use core::IterativeResolver;
pub use referral::NextStep;
