pub mod placeholder;
pub mod revenue;
