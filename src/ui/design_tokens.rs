// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the controls overlay.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Control sizes, also used to compute hit regions
- **Typography**: Font sizes
- **Radius**: Border radii

## Examples

```
use iced_video_controls::ui::design_tokens::{opacity, palette};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
assert!(backdrop.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Unplayed part of the seek track.
    pub const GRAY_400: Color = Color::from_rgb(0.667, 0.667, 0.667);
    /// Buffered part of the seek track.
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimming layer behind the controls.
    pub const BACKDROP: f32 = 0.3;
    pub const PRESSED: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;

    /// Default gap between the playback buttons.
    pub const BUTTON_GAP: f32 = 15.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the seek track.
    pub const TRACK_HEIGHT: f32 = 4.0;
    /// Height of the slider row (track, labels and fullscreen button).
    pub const SLIDER_ROW_HEIGHT: f32 = 32.0;
    /// Fixed width of the current time label.
    pub const CURRENT_TIME_WIDTH: f32 = 35.0;
    /// Fixed width of the total duration label.
    pub const TOTAL_TIME_WIDTH: f32 = 64.0;
    /// Playback button hit area.
    pub const PLAYBACK_BUTTON: f32 = 56.0;
    /// Fullscreen toggle hit area.
    pub const FULLSCREEN_BUTTON: f32 = 32.0;
    /// Drawn size of the slider thumb.
    pub const THUMB: f32 = 20.0;

    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Time labels.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::MD > spacing::SM && spacing::SM > spacing::XS);
    assert!(opacity::PRESSED > opacity::BACKDROP && opacity::PRESSED < 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(sizing::SLIDER_ROW_HEIGHT >= sizing::TRACK_HEIGHT);
    assert!(sizing::PLAYBACK_BUTTON >= sizing::ICON_LG);
};
