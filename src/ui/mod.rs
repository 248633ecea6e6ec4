pub mod notice;
pub mod prefs;

pub use notice::{Notice, NoticeLevel};
pub use prefs::UiPrefs;
