pub mod classify;
pub mod keymap;
