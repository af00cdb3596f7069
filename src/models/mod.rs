pub mod bs;
pub mod gauss;
