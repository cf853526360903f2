mod normalize;

pub use normalize::normalize;
