pub mod escape;
pub mod progbar;
pub mod state;
pub mod subtitle;
pub mod text;
