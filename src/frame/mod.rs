pub mod assembler;
pub mod bits;
pub mod spec;

pub use assembler::{FrameCursor, PullState, assemble};
pub use spec::{FrameSpec, Generation};
