pub mod racing;
pub mod sports;
