//! Theme module for question-solver
//!
//! This module provides a centralized color palette and styling constants
//! for the slate/sky "night sky" look of the solver.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

// ============================================================================
// Background Colors - Slate Palette
// ============================================================================

/// Primary background color - slate 900 (#0f172a)
pub const BG_PRIMARY: Color = Color::Rgb(15, 23, 42);

/// Panel background color - slate 800 (#1e293b)
pub const BG_SECONDARY: Color = Color::Rgb(30, 41, 59);

/// Subtle border color - slate 700 (#334155)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 65, 85);

// ============================================================================
// Accent Colors - Sky/Indigo
// ============================================================================

/// Primary sky accent (#7dd3fc)
pub const SKY_PRIMARY: Color = Color::Rgb(125, 211, 252);

/// Strong sky accent for the send hint (#0284c7)
pub const SKY_STRONG: Color = Color::Rgb(2, 132, 199);

/// Indigo accent for the title glyph (#818cf8)
pub const INDIGO_ACCENT: Color = Color::Rgb(129, 140, 248);

// ============================================================================
// Status Colors
// ============================================================================

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#cbd5e1)
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Disabled control color (#475569)
pub const TEXT_DISABLED: Color = Color::Rgb(71, 85, 105);

// ============================================================================
// Borders & Animation
// ============================================================================

pub const ROUNDED_BORDERS: BorderType = BorderType::Rounded;

/// Ticks spent on each side of a pulse
const PULSE_HALF_PERIOD: u64 = 5;

/// Alternate between two colors to give a slow pulse effect
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / PULSE_HALF_PERIOD) % 2 == 0 {
        bright
    } else {
        dim
    }
}
