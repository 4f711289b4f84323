pub mod notify;
pub mod render;

pub use notify::{Icon, Notification};
pub use render::{render_recommendation, render_report};
