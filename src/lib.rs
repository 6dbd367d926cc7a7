//! # ease-codegen
//!
//! A CLI tool and library for scaffolding Ease state-management ViewModels.
//!
//! For a ViewModel named `Counter` it writes two files:
//! - **`counter_view_model.dart`**: the `StateNotifier` subclass with a sensible initial state.
//! - **`counter_view_model.ease.dart`**: the provider, inherited model and
//!   `BuildContext` accessors (`get`, `read`, `select`, `listenOn`).
//!
//! The companion file can be regenerated at any time from the main file, which
//! is useful after changing the state type by hand.
//!
//! ## Usage
//!
//! The generation core has no I/O and can be used on its own:
//!
//! ```rust
//! use ease_codegen::generator::render;
//! use ease_codegen::parser::extract;
//!
//! let pair = render("CounterViewModel", "counter_view_model", "int");
//! let decl = extract(&pair.main_content).unwrap();
//! assert_eq!(decl.state_type, "int");
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod known_types;
pub mod models;
pub mod naming;
pub mod parser;
pub mod pipeline;
pub mod scanner;
