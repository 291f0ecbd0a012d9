pub mod annotate;
pub mod shared;
pub mod tss;
