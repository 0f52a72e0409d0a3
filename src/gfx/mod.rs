pub mod canvas;
pub mod frame;
pub mod pixel;
pub mod scale;
