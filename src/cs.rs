pub mod greedy;

// Re-export all modules
pub use greedy::*;
