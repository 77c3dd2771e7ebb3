//! Business services composing the stores.

pub mod checkout;
