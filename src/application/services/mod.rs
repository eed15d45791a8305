//! Application services

pub mod menu;

pub use menu::MenuService;
