pub mod lenient;
pub mod wire;
