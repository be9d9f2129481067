//! Plain data carried through a run: search inputs, profiles, and the run summary.

pub mod profile;
pub mod summary;

pub use profile::*;
pub use summary::*;
