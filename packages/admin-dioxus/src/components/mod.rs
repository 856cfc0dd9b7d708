//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod empty_state;
mod loading;
mod notices;
mod pagination;
mod role_gate;

pub use admin_layout::*;
pub use admin_nav::*;
pub use empty_state::*;
pub use loading::*;
pub use notices::*;
pub use pagination::*;
pub use role_gate::*;
