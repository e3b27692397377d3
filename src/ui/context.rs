use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use authdeploy::presentation::{ColorWhen, ConsoleStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            _ if json => false,
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            color,
            unicode: caps.supports_unicode,
        }
    }

    pub fn style(&self) -> ConsoleStyle {
        ConsoleStyle {
            color: self.color,
            unicode: self.unicode,
        }
    }
}
