pub mod bigint;

pub use bigint::{BigInt, ParseBigIntError};
