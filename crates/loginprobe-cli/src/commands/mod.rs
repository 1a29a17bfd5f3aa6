pub mod check;
pub mod completion;
