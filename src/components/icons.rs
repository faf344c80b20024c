//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::policy::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as File, LuFileCode as FileCode, LuFileSpreadsheet as FileTable,
        LuFileText as FileText, LuImage as FileImage, LuInfo as Info, LuTriangleAlert as Warning,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsExclamationTriangle as Warning, BsFileEarmark as File, BsFileEarmarkCode as FileCode,
        BsFileEarmarkImage as FileImage, BsFileEarmarkSpreadsheet as FileTable,
        BsFileEarmarkText as FileText, BsInfoCircle as Info, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_TABLE, FileTable);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(CLOSE, Close);
themed_icon!(INFO, Info);
themed_icon!(WARNING, Warning);

/// Icon for a file in the list.
pub fn for_kind(kind: FileKind) -> Icon {
    match kind {
        FileKind::Csv => FILE_TABLE,
        FileKind::Html | FileKind::Json => FILE_CODE,
        FileKind::Image => FILE_IMAGE,
        FileKind::Txt => FILE_TEXT,
        FileKind::Unsupported => FILE,
    }
}
