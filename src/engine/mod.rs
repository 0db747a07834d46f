pub mod binder;
pub mod executor;
pub mod resolver;
