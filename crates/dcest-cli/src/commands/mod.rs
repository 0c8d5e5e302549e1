pub mod buses;
pub mod cost;
pub mod template;
