//! Shared test fixtures for the prototype kit extension workspace.
//!
//! This crate provides an on-disk project fixture so crate test suites do
//! not each reimplement `package.json` and `node_modules/` scaffolding.
//! It is a dev-dependency only and is never published.

pub mod project;

pub use project::TestProject;
