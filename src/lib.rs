pub mod aliases;
pub mod error;
pub mod wim_info;
pub mod windows;

pub use error::WimInfoError;
pub use wim_info::{Section, WimInfo, parse_wim_info, parse_wim_info_from_reader};
pub use windows::{detect_windows_architecture, detect_windows_version};
