pub mod calculator;
pub mod logic;
