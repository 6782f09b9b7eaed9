pub mod date;
pub mod table;
