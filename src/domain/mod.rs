pub mod speech;
pub mod wizard;
