pub mod biguint;
pub mod error;

pub use biguint::BigUInt;
pub use error::BigUIntError;
