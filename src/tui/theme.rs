use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub accent: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub warn: Color,
}

impl Theme {
    pub fn from_config(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "mono" | "monochrome" => Self::mono(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            accent: Color::Cyan,
            border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            highlight_fg: Color::Black,
            highlight_bg: Color::Green,
            gauge_filled: Color::Rgb(103, 232, 249),
            gauge_unfilled: Color::DarkGray,
            warn: Color::Red,
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            accent: Color::Blue,
            border: Color::Gray,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            highlight_fg: Color::White,
            highlight_bg: Color::Blue,
            gauge_filled: Color::Blue,
            gauge_unfilled: Color::Gray,
            warn: Color::Red,
        }
    }

    pub fn mono() -> Self {
        Theme {
            name: "mono",
            accent: Color::White,
            border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
            gauge_filled: Color::White,
            gauge_unfilled: Color::DarkGray,
            warn: Color::White,
        }
    }
}
