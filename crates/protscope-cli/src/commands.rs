pub mod analyze;
pub mod compare;
pub mod lookup;
pub mod shell;
