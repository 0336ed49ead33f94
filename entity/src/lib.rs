pub mod prelude;
pub mod ship;
