//! Property-based tests for the Prim builder.
//!
//! Checks the builder against a sequential Kruskal oracle and verifies the
//! trace invariants (termination, frontier monotonicity, tie-breaking,
//! weight bookkeeping and idempotence) across generated graphs.

mod invariants;
mod oracle;
mod strategies;
mod types;
