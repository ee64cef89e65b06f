pub mod annotation;
pub mod area;
pub mod axes;
pub mod legend;
