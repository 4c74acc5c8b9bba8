//! End-to-end scenarios: real adapters from `dirule-adapters` injected into the entities
//! of `dirule-core`, wired here exactly as an assembler would.

mod announcement;
mod poem;
mod reach;
