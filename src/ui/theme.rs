use ratatui::style::Color;

use crate::domain::weather::WeatherCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
    pub temp_cold: Color,
    pub temp_mild: Color,
    pub temp_warm: Color,
    pub temp_hot: Color,
}

#[must_use]
pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        ColorCapability::TrueColor
    } else {
        ColorCapability::Basic16
    }
}

#[must_use]
pub fn theme_for(category: WeatherCategory, capability: ColorCapability) -> Theme {
    if capability == ColorCapability::Basic16 {
        return basic_theme(category);
    }

    let (surface, accent) = match category {
        WeatherCategory::Clear => ((13, 53, 102), (255, 215, 117)),
        WeatherCategory::Cloudy => ((25, 36, 51), (210, 223, 235)),
        WeatherCategory::Rain => ((17, 47, 88), (153, 214, 255)),
        WeatherCategory::Snow => ((27, 51, 77), (237, 247, 255)),
        WeatherCategory::Fog => ((30, 34, 40), (216, 220, 224)),
        WeatherCategory::Thunder => ((28, 25, 66), (255, 223, 112)),
        WeatherCategory::Unknown => ((15, 23, 42), (96, 165, 250)),
    };

    Theme {
        surface: rgb(surface),
        accent: rgb(accent),
        text: Color::Rgb(241, 245, 249),
        muted_text: Color::Rgb(148, 163, 184),
        border: Color::Rgb(71, 85, 105),
        info: Color::Rgb(59, 130, 246),
        warning: Color::Rgb(250, 204, 21),
        danger: Color::Rgb(248, 113, 113),
        temp_cold: Color::Rgb(125, 211, 252),
        temp_mild: Color::Rgb(134, 239, 172),
        temp_warm: Color::Rgb(253, 224, 71),
        temp_hot: Color::Rgb(251, 146, 60),
    }
}

fn basic_theme(category: WeatherCategory) -> Theme {
    let accent = match category {
        WeatherCategory::Clear | WeatherCategory::Thunder => Color::Yellow,
        WeatherCategory::Rain => Color::LightBlue,
        WeatherCategory::Snow | WeatherCategory::Fog => Color::White,
        WeatherCategory::Cloudy | WeatherCategory::Unknown => Color::Cyan,
    };
    Theme {
        surface: Color::Reset,
        accent,
        text: Color::White,
        muted_text: Color::Gray,
        border: Color::DarkGray,
        info: Color::LightBlue,
        warning: Color::Yellow,
        danger: Color::LightRed,
        temp_cold: Color::Cyan,
        temp_mild: Color::Green,
        temp_warm: Color::Yellow,
        temp_hot: Color::LightRed,
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[must_use]
pub fn icon_color(theme: &Theme, category: WeatherCategory) -> Color {
    match category {
        WeatherCategory::Clear | WeatherCategory::Unknown => theme.warning,
        WeatherCategory::Cloudy | WeatherCategory::Fog => theme.muted_text,
        WeatherCategory::Rain => theme.info,
        WeatherCategory::Snow => theme.text,
        WeatherCategory::Thunder => theme.danger,
    }
}

#[must_use]
pub fn temp_color(theme: &Theme, temp: i32) -> Color {
    if temp <= 2 {
        theme.temp_cold
    } else if temp <= 16 {
        theme.temp_mild
    } else if temp <= 28 {
        theme.temp_warm
    } else {
        theme.temp_hot
    }
}
