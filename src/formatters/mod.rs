pub mod dot;
pub mod json;

pub use dot::DotFormatter;
pub use json::JsonFormatter;
