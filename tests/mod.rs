pub mod convert;
pub mod macros;
pub mod pipe;
