//! Retrieval service integration for LuGPT.
//!
//! This crate provides a provider-agnostic abstraction for the external
//! retrieval-and-generation service. The service condenses a follow-up
//! question using the chat history, runs a vector similarity search, and
//! synthesizes an answer with inline `SOURCES:` citations; this crate only
//! frames requests and surfaces the combined payload.
//!
//! # Providers
//! - **http**: the hosted service over JSON (default)
//! - **mock**: scripted responses for tests
//!
//! # Example
//! ```no_run
//! use lugpt_retrieval::{RetrievalClient, providers::MockRetrievalClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MockRetrievalClient::new();
//! client.push_answer("Die Antwort.SOURCES:\n- a__b.txt\n");
//! let result = client.answer("Frage?", &[]).await?;
//! println!("{}", result.answer);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod condense;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::RetrievalClient;
pub use condense::render_condense_prompt;
pub use factory::create_client;
pub use providers::{HttpRetrievalClient, MockRetrievalClient};
pub use types::{RetrievalResult, Turn};
