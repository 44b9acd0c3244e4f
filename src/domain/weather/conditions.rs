use crate::cli::IconMode;

/// Label used for any weather code outside the known table.
pub const DEFAULT_CONDITION_LABEL: &str = "Clear";
/// Wording for an unknown code inside the current-conditions sentence.
pub const DEFAULT_DESCRIPTION_LABEL: &str = "clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// WMO weather interpretation codes as reported by Open-Meteo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    DepositingRimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    LightFreezingDrizzle,
    DenseFreezingDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    LightFreezingRain,
    HeavyFreezingRain,
    SlightSnow,
    ModerateSnow,
    HeavySnow,
    SnowGrains,
    SlightRainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    SlightSnowShowers,
    HeavySnowShowers,
    Thunderstorm,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
    Unrecognized(i64),
}

impl WeatherCondition {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::LightDrizzle,
            53 => Self::ModerateDrizzle,
            55 => Self::DenseDrizzle,
            56 => Self::LightFreezingDrizzle,
            57 => Self::DenseFreezingDrizzle,
            61 => Self::SlightRain,
            63 => Self::ModerateRain,
            65 => Self::HeavyRain,
            66 => Self::LightFreezingRain,
            67 => Self::HeavyFreezingRain,
            71 => Self::SlightSnow,
            73 => Self::ModerateSnow,
            75 => Self::HeavySnow,
            77 => Self::SnowGrains,
            80 => Self::SlightRainShowers,
            81 => Self::ModerateRainShowers,
            82 => Self::ViolentRainShowers,
            85 => Self::SlightSnowShowers,
            86 => Self::HeavySnowShowers,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            other => Self::Unrecognized(other),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ClearSky => "Clear Sky",
            Self::MainlyClear => "Mainly Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing Rime Fog",
            Self::LightDrizzle => "Light Drizzle",
            Self::ModerateDrizzle => "Moderate Drizzle",
            Self::DenseDrizzle => "Dense Drizzle",
            Self::LightFreezingDrizzle => "Light Freezing Drizzle",
            Self::DenseFreezingDrizzle => "Dense Freezing Drizzle",
            Self::SlightRain => "Slight Rain",
            Self::ModerateRain => "Moderate Rain",
            Self::HeavyRain => "Heavy Rain",
            Self::LightFreezingRain => "Light Freezing Rain",
            Self::HeavyFreezingRain => "Heavy Freezing Rain",
            Self::SlightSnow => "Slight Snow",
            Self::ModerateSnow => "Moderate Snow",
            Self::HeavySnow => "Heavy Snow",
            Self::SnowGrains => "Snow Grains",
            Self::SlightRainShowers => "Slight Rain Showers",
            Self::ModerateRainShowers => "Moderate Rain Showers",
            Self::ViolentRainShowers => "Violent Rain Showers",
            Self::SlightSnowShowers => "Slight Snow Showers",
            Self::HeavySnowShowers => "Heavy Snow Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormSlightHail => "Thunderstorm With Slight Hail",
            Self::ThunderstormHeavyHail => "Thunderstorm With Heavy Hail",
            Self::Unrecognized(_) => DEFAULT_CONDITION_LABEL,
        }
    }

    /// Label as it reads mid-sentence; only the fallback differs from [`Self::label`].
    #[must_use]
    pub fn description_label(self) -> &'static str {
        match self {
            Self::Unrecognized(_) => DEFAULT_DESCRIPTION_LABEL,
            known => known.label(),
        }
    }

    #[must_use]
    pub fn category(self) -> WeatherCategory {
        match self {
            Self::ClearSky | Self::MainlyClear => WeatherCategory::Clear,
            Self::PartlyCloudy | Self::Overcast => WeatherCategory::Cloudy,
            Self::Fog | Self::DepositingRimeFog => WeatherCategory::Fog,
            Self::LightDrizzle
            | Self::ModerateDrizzle
            | Self::DenseDrizzle
            | Self::LightFreezingDrizzle
            | Self::DenseFreezingDrizzle
            | Self::SlightRain
            | Self::ModerateRain
            | Self::HeavyRain
            | Self::LightFreezingRain
            | Self::HeavyFreezingRain
            | Self::SlightRainShowers
            | Self::ModerateRainShowers
            | Self::ViolentRainShowers => WeatherCategory::Rain,
            Self::SlightSnow
            | Self::ModerateSnow
            | Self::HeavySnow
            | Self::SnowGrains
            | Self::SlightSnowShowers
            | Self::HeavySnowShowers => WeatherCategory::Snow,
            Self::Thunderstorm | Self::ThunderstormSlightHail | Self::ThunderstormHeavyHail => {
                WeatherCategory::Thunder
            }
            Self::Unrecognized(_) => WeatherCategory::Unknown,
        }
    }

    #[must_use]
    pub fn icon(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = icon_tokens(self.category());
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

fn icon_tokens(category: WeatherCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        WeatherCategory::Clear => ("SUN", "☀️", "☀"),
        WeatherCategory::Cloudy => ("CLD", "☁️", "☁"),
        WeatherCategory::Rain => ("RAN", "🌧️", "☂"),
        WeatherCategory::Snow => ("SNW", "🌨️", "❄"),
        WeatherCategory::Fog => ("FOG", "🌫️", "░"),
        WeatherCategory::Thunder => ("THN", "⛈️", "⚡"),
        WeatherCategory::Unknown => ("---", "☀️", "☀"),
    }
}
