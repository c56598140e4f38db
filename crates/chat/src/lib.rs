//! Conversation layer for LuGPT.
//!
//! Everything genuinely local to this system lives here: the append-only
//! conversation history, the answer/sources payload splitter, and the
//! session that ties them to a retrieval client with all-or-nothing turn
//! semantics.

pub mod format;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use format::{split_answer, FormattedAnswer};
pub use history::ConversationState;
pub use session::ChatSession;
