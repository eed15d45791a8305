//! webmenu: navigation menu trees for web dashboards
//!
//! A menu is a tree of [`domain::MenuNode`]s. The application adds its
//! static entries, every loaded module merges its own fragments in, and the
//! result is ordered by priority and title for rendering.
//!
//! Architecture:
//! - `domain`: the tree, merge/rename/order algorithms and traversal
//! - `application`: menu assembly service
//! - `infrastructure`: module and translation collaborators, DI container
//! - `cli`: the inspection command line
//! - `config`: layered settings

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{MenuError, MenuNode, MenuProperties};
