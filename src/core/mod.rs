pub mod carousel;
pub mod logging;
pub mod persona;
pub mod selector;
