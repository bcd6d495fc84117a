//! Database integration for seeding.
//!
//! The [`Seeder`] writes a [`SeedFixture`](crate::fixture::SeedFixture) into
//! any [`DocumentStore`](focusbuddy::DocumentStore), logging each write.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
