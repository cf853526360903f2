pub mod copy_field;

pub use copy_field::copy_field;
