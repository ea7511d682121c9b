pub mod letter;
pub mod report;
pub mod validate;
