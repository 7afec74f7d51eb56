pub mod number;

pub use number::Number;
