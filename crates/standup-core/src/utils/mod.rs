//! Small, dependency-free helpers shared by the domain and adapters.

pub mod slug;
