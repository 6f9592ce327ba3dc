pub mod icons;
pub mod motion;
pub mod picture;
pub mod sheet;
pub mod storage;
pub mod style;
pub mod theme;
pub mod viewport;
