// ============================================================================
// Domain Models Module
// Contains the monetary value types
// ============================================================================

pub mod currency;
pub mod money;
pub mod rational_money;
pub mod tax;

pub use currency::Currency;
pub use money::{Money, MoneyData, MoneyInput};
pub use rational_money::{RationalInput, RationalMoney};
