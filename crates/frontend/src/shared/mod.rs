pub mod dom;
pub mod icons;
pub mod theme;
