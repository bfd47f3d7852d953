//! Writes a single line into a generated listing file, either truncating it or appending to it. Build steps call
//! the `bindshader` binary once per shader module or symbol to accumulate the listing, or use [`create_line`] and
//! [`append_line`] directly from a `build.rs`.

pub mod cli;
pub mod error;
pub mod target;
pub mod writer;


pub use cli::{run, Cli};
pub use error::BindShaderError;
pub use target::{Mode, Target, APPEND_MARKER};
pub use writer::{append_line, create_line, Invocation};
