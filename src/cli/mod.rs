pub mod das;
pub mod format;
pub mod mask;
pub mod shared;
