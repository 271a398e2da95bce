//! Purpose: Internal JSON parsing boundary shared by the runner.
//! Exports: `parse` module with the text-to-tree helper.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: All text-to-tree parsing goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
