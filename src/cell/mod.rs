//! Token-branded interior mutability.
//!
//! Only the safe, token-gated [`GhostCell`] is needed here: graph state is
//! read with `&GhostToken` and rewritten with `&mut GhostToken`.

pub mod ghost_cell;

pub use ghost_cell::GhostCell;
