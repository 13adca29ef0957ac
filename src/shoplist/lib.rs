//! # Shoplist Architecture
//!
//! Shoplist is a **UI-agnostic shopping-list library** with an interactive terminal client.
//! Everything the user can do (add, toggle, delete, filter) is expressed as a transition on an
//! explicit state container; the terminal session is just one way of feeding it events.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session lines, renders the view     │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The state container: store + draft + filter criteria     │
//! │  - Normalizes inputs (row numbers / id prefixes → ids,      │
//! │    labels → catalog entries)                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Filter Engine (filter.rs)  │
//! │  - Pure business logic, returns `CmdResult`                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait, `InMemoryStore`                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<CmdResult>`. It never
//! writes to stdout/stderr and never exits the process. Diagnostics go through `tracing`
//! and are only visible when the binary installs a subscriber.
//!
//! ## Row Numbers
//!
//! Products are keyed by an opaque random id, which is unpleasant to type. The table shows each
//! product's 1-based position in insertion order, and toggle/delete accept either that number
//! or an id prefix. See [`index`].
//!
//! ## Module Overview
//!
//! - [`api`]: The state container and entry point for all operations
//! - [`commands`]: Business logic for each transition
//! - [`filter`]: The filter engine and filter criteria
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Product`, `ProductId`, `Draft`)
//! - [`index`]: Row numbers and product selectors
//! - [`config`]: Shop and category catalog
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the session loop and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod store;
