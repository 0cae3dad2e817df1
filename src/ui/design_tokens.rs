// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared sizes and levels for the avatar editor widgets.

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

```
use iced_avatar::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let frame_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::GRAY_400
};
let padding = spacing::MD; // 16px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;

    /// Panels laid over the window background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Scale slider between the zoom buttons.
    pub const SLIDER_WIDTH: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Status line, scale readout
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Dashed upload frame
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < opacity::SURFACE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }
}
