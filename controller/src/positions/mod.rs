pub mod account;
pub mod borrow;
pub mod deposit;
pub mod leverage;
pub mod liquidation;
pub mod repay;
pub mod transfer;
pub mod withdraw;
