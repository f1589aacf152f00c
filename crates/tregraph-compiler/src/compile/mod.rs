//! Graph-to-text compilation.
//!
//! Depth-first traversal from the head node. Each node is expanded once;
//! reaching it again yields a back-reference. Each relation is rendered
//! once, from whichever endpoint the traversal meets it first: outgoing
//! relations render forward, incoming ones reversed.
//!
//! # Module Organization
//!
//! - `compiler`: traversal state and entry points
//! - `validate`: pre-pass checks on labels and group labels

mod compiler;
mod validate;


pub use compiler::{Compiled, Compiler};
