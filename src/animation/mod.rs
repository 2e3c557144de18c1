pub mod bleed;
pub mod frame;
pub mod interp;
pub mod pixel;
