//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the reveal shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const REVEAL_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const REVEAL_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Show/hide password shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+T";
