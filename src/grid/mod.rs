//! Parameter grid construction.
//!
//! - translation factor table (`factors`)
//! - cross product over the factor table (`product`)
//! - cleavage variant groups (`variants`)
//! - pairing of both families into flat records (`merge`)

pub mod factors;
pub mod merge;
pub mod product;
pub mod variants;

pub use factors::*;
pub use merge::*;
pub use product::*;
pub use variants::*;
