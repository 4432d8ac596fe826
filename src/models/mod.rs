pub mod schedule;
pub mod table;
pub mod window;
