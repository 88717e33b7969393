pub mod persona_modal;
pub mod selector;
