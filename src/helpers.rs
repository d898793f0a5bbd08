use crate::common::Color;

pub fn alpha_blend(bg: Color, fg: Color, alpha: f32) -> Color {
    let gamma = 2.2;
    let blend = |b: u8, f: u8| {
        f32::powf(
            (1.0 - alpha) * f32::powf(b as f32, gamma) + alpha * f32::powf(f as f32, gamma),
            1.0 / gamma,
        )
        .round() as u8
    };
    Color::new(
        blend(bg.red, fg.red),
        blend(bg.green, fg.green),
        blend(bg.blue, fg.blue),
    )
}

// Rec. 601 luma, 0-255
fn luma(c: Color) -> f32 {
    0.299 * c.red as f32 + 0.587 * c.green as f32 + 0.114 * c.blue as f32
}

/// Label color that stays readable on top of `bg`.
pub fn text_color(bg: Color) -> Color {
    if luma(bg) > 150.0 {
        Color::new(0x77, 0x6e, 0x65)
    } else {
        Color::new(0xf9, 0xf6, 0xf2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let bg = Color::new(241, 101, 40);
        let white = Color::new(255, 255, 255);
        assert_eq!(alpha_blend(bg, white, 0.0), bg);
        assert_eq!(alpha_blend(bg, white, 1.0), white);
    }

    #[test]
    fn blend_moves_toward_foreground() {
        let bg = Color::new(241, 101, 40);
        let out = alpha_blend(bg, Color::new(255, 255, 255), 0.5);
        assert!(out.green > bg.green);
        assert!(out.blue > bg.blue);
    }

    #[test]
    fn text_contrasts_with_background() {
        assert_eq!(text_color(Color::new(255, 255, 255)), Color::new(0x77, 0x6e, 0x65));
        assert_eq!(text_color(Color::new(241, 101, 40)), Color::new(0xf9, 0xf6, 0xf2));
    }
}
