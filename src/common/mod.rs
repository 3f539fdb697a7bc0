pub(crate) mod macros;

pub mod bch;
pub mod bit_utils;
pub mod codec;
pub mod ec;
pub mod error;
pub mod iter;
pub mod mask;
pub mod metadata;

pub use bit_utils::*;
pub use iter::*;
pub use mask::*;
pub use metadata::*;
