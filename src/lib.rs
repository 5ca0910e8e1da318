//! In-memory electronic component inventory with a menu-driven shell.
//!
//! # Examples
//!
//! Direct usage of [`inventory::Inventory`]:
//! ```
//! use partsbin::{component::ComponentDraft, inventory::Inventory};
//! use rust_decimal::Decimal;
//!
//! let mut inv = Inventory::new();
//! inv.add(ComponentDraft {
//!     id: 1,
//!     name: "Resistor".to_string(),
//!     price: Decimal::new(50, 2),
//!     quantity: 100,
//!     description: "Carbon film".to_string(),
//! }).expect("add");
//!
//! let removed = inv.remove_last().expect("remove");
//! assert_eq!(removed.id, 1);
//! assert!(inv.is_empty());
//! ```
//!
//! Scripted shell session:
//! ```
//! use partsbin::{config::ShellConfig, shell::Shell};
//!
//! let input = "1\n7\nLED\n0.10\n25\nRed 5mm\n4\n5\n";
//! let mut shell = Shell::new(input.as_bytes(), Vec::new(), ShellConfig::default());
//! shell.run().expect("run");
//! let out = String::from_utf8(shell.into_output()).expect("utf8");
//! assert!(out.contains("ID: 7, Name: LED, Price: Rs0.10, Quantity: 25, Description: Red 5mm"));
//! ```
#![warn(missing_docs)]

/// Component record and draft types.
pub mod component;
/// Shell configuration.
pub mod config;
/// Record store, recency stack and traversal queue.
pub mod core;
/// Inventory state and its errors.
pub mod inventory;
/// Table and queue rendering.
pub mod render;
/// Interactive menu shell.
pub mod shell;
/// Shared primitive types.
pub mod types;
