pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::copy_field;
pub use layouts::desktop_layout;
