//! Reusable UI components

mod notice;

pub use notice::{render_notice, Notice, NoticeKind};
