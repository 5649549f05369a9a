//! Built-in style records, at full 1080x1920 output scale.

use crate::image::{Color, Fill, GradientStop};
use crate::style::{
    AccentBar, Divider, DurationGap, Ornament, RenderStyle, RowMetrics, Spacing, StyleName,
    TextStyle, TextTable,
};

const HELVETICA: &str = "Helvetica Neue, Helvetica, Arial, sans-serif";
const INTER: &str = "Inter, Arial, sans-serif";

pub fn style(name: StyleName) -> RenderStyle {
    match name {
        StyleName::Bold => bold(),
        StyleName::Modern => modern(),
        StyleName::Transparent => transparent(),
        StyleName::Story => story(),
        StyleName::Fire => fire(),
        StyleName::Minimal => minimal(),
        StyleName::Gradient => gradient(),
    }
}

fn orange() -> Color {
    Color::rgb(0xF9, 0x73, 0x16)
}

fn white(a: f64) -> Color {
    Color::rgba(255, 255, 255, a)
}

fn black(a: f64) -> Color {
    Color::rgba(0, 0, 0, a)
}

fn bold() -> RenderStyle {
    RenderStyle {
        name: StyleName::Bold,
        family: INTER.into(),
        background: vec![Fill::Solid(Color::rgb(0x0A, 0x0A, 0x0A))],
        text: TextTable {
            title: TextStyle::new(700, 64.0, Color::WHITE),
            date: TextStyle::new(400, 32.0, white(0.7)),
            duration: TextStyle::new(400, 28.0, white(0.6)),
            exercise: TextStyle::new(500, 38.0, Color::WHITE),
            sets: TextStyle::new(400, 32.0, white(0.7)),
            group: TextStyle::new(400, 26.0, white(0.6)),
            brand: TextStyle::new(600, 32.0, orange()),
            tagline: TextStyle::new(400, 24.0, white(0.5)),
        },
        spacing: Spacing {
            title_height: 80.0,
            date_height: 40.0,
            date_gap: 10.0,
            duration_height: 30.0,
            divider_height: 50.0,
            group_height: 40.0,
            brand_height: 40.0,
            tagline_height: 0.0,
            spacing: 20.0,
        },
        row: RowMetrics {
            sets_offset: 50.0,
            height: 110.0,
        },
        divider: Divider {
            half_width: 200.0,
            line_width: 1.0,
            color: white(0.2),
        },
        duration_gap: DurationGap::Reserve,
        accent_bar: None,
        date_ornament: None,
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}

fn modern() -> RenderStyle {
    RenderStyle {
        name: StyleName::Modern,
        family: INTER.into(),
        background: vec![Fill::Solid(Color::rgb(0x11, 0x18, 0x27))],
        text: TextTable {
            title: TextStyle::new(600, 56.0, Color::WHITE),
            date: TextStyle::new(400, 28.0, white(0.75)),
            duration: TextStyle::new(400, 26.0, white(0.65)),
            exercise: TextStyle::new(500, 40.0, Color::WHITE),
            sets: TextStyle::new(600, 32.0, orange()),
            group: TextStyle::new(400, 24.0, white(0.65)),
            brand: TextStyle::new(600, 28.0, orange()),
            tagline: TextStyle::new(400, 22.0, white(0.5)),
        },
        spacing: Spacing {
            title_height: 70.0,
            date_height: 40.0,
            date_gap: 10.0,
            duration_height: 30.0,
            divider_height: 40.0,
            group_height: 36.0,
            brand_height: 36.0,
            tagline_height: 0.0,
            spacing: 20.0,
        },
        row: RowMetrics {
            sets_offset: 55.0,
            height: 110.0,
        },
        divider: Divider {
            half_width: 180.0,
            line_width: 1.0,
            color: Color::rgba(249, 115, 22, 0.3),
        },
        duration_gap: DurationGap::Collapse,
        accent_bar: Some(AccentBar {
            width: 400.0,
            height: 4.0,
            offset: 40.0,
            fill: Fill::horizontal(orange(), Color::rgb(0xEA, 0x58, 0x0C)),
        }),
        date_ornament: Some(Ornament {
            glyph: "•".into(),
            offset: 130.0,
            color: orange(),
        }),
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}

fn transparent() -> RenderStyle {
    RenderStyle {
        name: StyleName::Transparent,
        family: HELVETICA.into(),
        background: Vec::new(),
        text: TextTable {
            title: TextStyle::new(600, 64.0, Color::BLACK),
            date: TextStyle::new(400, 26.0, Color::BLACK),
            duration: TextStyle::new(400, 26.0, Color::BLACK),
            exercise: TextStyle::new(400, 36.0, Color::BLACK),
            sets: TextStyle::new(400, 28.0, Color::BLACK),
            group: TextStyle::new(400, 22.0, Color::BLACK),
            brand: TextStyle::new(600, 30.0, Color::BLACK),
            tagline: TextStyle::new(400, 22.0, black(0.5)),
        },
        spacing: Spacing {
            title_height: 95.0,
            date_height: 32.0,
            date_gap: 10.0,
            duration_height: 32.0,
            divider_height: 25.0,
            group_height: 40.0,
            brand_height: 45.0,
            tagline_height: 0.0,
            spacing: 50.0,
        },
        row: RowMetrics {
            sets_offset: 48.0,
            height: 123.0,
        },
        divider: Divider {
            half_width: 320.0,
            line_width: 1.0,
            color: black(0.3),
        },
        duration_gap: DurationGap::Collapse,
        accent_bar: None,
        date_ornament: None,
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}

fn story() -> RenderStyle {
    RenderStyle {
        name: StyleName::Story,
        family: INTER.into(),
        background: vec![
            Fill::vertical(Color::rgb(0x10, 0x10, 0x10), Color::BLACK),
            Fill::Radial {
                center: (0.5, 0.5),
                inner: 200.0,
                outer: 700.0,
                stops: vec![
                    GradientStop::new(0.0, Color::rgba(255, 102, 0, 0.08)),
                    GradientStop::new(1.0, Color::rgba(255, 102, 0, 0.0)),
                ],
            },
        ],
        text: TextTable {
            title: TextStyle::new(700, 80.0, Color::WHITE),
            date: TextStyle::new(500, 48.0, white(0.75)),
            duration: TextStyle::new(700, 70.0, Color::rgb(0xFF, 0x66, 0x00)),
            exercise: TextStyle::new(400, 44.0, white(0.85)),
            sets: TextStyle::new(400, 36.0, white(0.6)),
            group: TextStyle::new(400, 34.0, white(0.6)),
            brand: TextStyle::new(700, 54.0, Color::rgb(0xFF, 0x66, 0x00)),
            tagline: TextStyle::new(400, 38.0, white(0.5)),
        },
        spacing: Spacing {
            title_height: 90.0,
            date_height: 56.0,
            date_gap: 24.0,
            duration_height: 80.0,
            divider_height: 20.0,
            group_height: 44.0,
            brand_height: 70.0,
            tagline_height: 48.0,
            spacing: 30.0,
        },
        row: RowMetrics {
            sets_offset: 52.0,
            height: 120.0,
        },
        divider: Divider {
            half_width: 200.0,
            line_width: 2.0,
            color: white(0.15),
        },
        duration_gap: DurationGap::Reserve,
        accent_bar: None,
        date_ornament: None,
        tagline: Some("Track. Share. Improve.".into()),
        show_kind: true,
        scale: 1.0,
    }
}

fn fire() -> RenderStyle {
    let amber = Color::rgb(0xFD, 0xE6, 0x8A);
    RenderStyle {
        name: StyleName::Fire,
        family: INTER.into(),
        background: vec![Fill::Radial {
            center: (0.5, 0.35),
            inner: 0.0,
            outer: 1400.0,
            stops: vec![
                GradientStop::new(0.0, Color::rgb(0xFF, 0x6A, 0x00)),
                GradientStop::new(0.55, Color::rgb(0xC2, 0x41, 0x0C)),
                GradientStop::new(1.0, Color::rgb(0x45, 0x0A, 0x0A)),
            ],
        }],
        text: TextTable {
            title: TextStyle::new(800, 72.0, Color::WHITE),
            date: TextStyle::new(600, 30.0, white(0.85)),
            duration: TextStyle::new(600, 30.0, amber),
            exercise: TextStyle::new(700, 40.0, Color::WHITE),
            sets: TextStyle::new(500, 30.0, Color::rgb(0xFE, 0xD7, 0xAA)),
            group: TextStyle::new(500, 26.0, white(0.85)),
            brand: TextStyle::new(800, 36.0, amber),
            tagline: TextStyle::new(400, 24.0, white(0.7)),
        },
        spacing: Spacing {
            title_height: 90.0,
            date_height: 36.0,
            date_gap: 12.0,
            duration_height: 36.0,
            divider_height: 24.0,
            group_height: 36.0,
            brand_height: 48.0,
            tagline_height: 0.0,
            spacing: 44.0,
        },
        row: RowMetrics {
            sets_offset: 52.0,
            height: 120.0,
        },
        divider: Divider {
            half_width: 260.0,
            line_width: 3.0,
            color: amber.with_alpha(0.6),
        },
        duration_gap: DurationGap::Collapse,
        accent_bar: None,
        date_ornament: None,
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}

fn minimal() -> RenderStyle {
    RenderStyle {
        name: StyleName::Minimal,
        family: HELVETICA.into(),
        background: vec![Fill::Solid(Color::WHITE)],
        text: TextTable {
            title: TextStyle::new(500, 60.0, Color::BLACK),
            date: TextStyle::new(400, 24.0, Color::BLACK),
            duration: TextStyle::new(400, 24.0, Color::BLACK),
            exercise: TextStyle::new(400, 34.0, Color::BLACK),
            sets: TextStyle::new(400, 26.0, Color::BLACK),
            group: TextStyle::new(400, 20.0, Color::BLACK),
            brand: TextStyle::new(500, 28.0, Color::BLACK),
            tagline: TextStyle::new(400, 20.0, black(0.5)),
        },
        spacing: Spacing {
            title_height: 88.0,
            date_height: 30.0,
            date_gap: 8.0,
            duration_height: 30.0,
            divider_height: 22.0,
            group_height: 38.0,
            brand_height: 42.0,
            tagline_height: 0.0,
            spacing: 48.0,
        },
        row: RowMetrics {
            sets_offset: 46.0,
            height: 118.0,
        },
        divider: Divider {
            half_width: 300.0,
            line_width: 1.0,
            color: black(0.25),
        },
        duration_gap: DurationGap::Collapse,
        accent_bar: None,
        date_ornament: None,
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}

fn gradient() -> RenderStyle {
    RenderStyle {
        name: StyleName::Gradient,
        family: INTER.into(),
        background: vec![Fill::Linear {
            start: (0.0, 0.0),
            end: (1.0, 1.0),
            stops: vec![
                GradientStop::new(0.0, orange()),
                GradientStop::new(1.0, Color::rgb(0xDB, 0x27, 0x77)),
            ],
        }],
        text: TextTable {
            title: TextStyle::new(700, 66.0, Color::WHITE),
            date: TextStyle::new(400, 28.0, white(0.85)),
            duration: TextStyle::new(400, 28.0, white(0.85)),
            exercise: TextStyle::new(600, 38.0, Color::WHITE),
            sets: TextStyle::new(400, 30.0, white(0.8)),
            group: TextStyle::new(400, 24.0, white(0.85)),
            brand: TextStyle::new(700, 32.0, Color::WHITE),
            tagline: TextStyle::new(400, 22.0, white(0.7)),
        },
        spacing: Spacing {
            title_height: 92.0,
            date_height: 34.0,
            date_gap: 10.0,
            duration_height: 34.0,
            divider_height: 24.0,
            group_height: 38.0,
            brand_height: 44.0,
            tagline_height: 0.0,
            spacing: 46.0,
        },
        row: RowMetrics {
            sets_offset: 48.0,
            height: 118.0,
        },
        divider: Divider {
            half_width: 280.0,
            line_width: 2.0,
            color: white(0.5),
        },
        duration_gap: DurationGap::Reserve,
        accent_bar: None,
        date_ornament: None,
        tagline: None,
        show_kind: false,
        scale: 1.0,
    }
}
