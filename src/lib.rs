pub mod components;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod document;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod layout;
pub mod runner;
pub mod tabs;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use desktop::Desktop;
pub use error::{Result, WmError};
