//! Page components: the animated weather backdrop and the report panels.

pub mod atmosphere;
pub mod panels;
