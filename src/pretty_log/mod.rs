use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Stdout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl From<ThemeColor> for Color {
    fn from(value: ThemeColor) -> Self {
        match value {
            ThemeColor::Main => Color::Reset,
            ThemeColor::Second => Color::Grey,
            ThemeColor::Success => Color::Green,
            ThemeColor::Warn => Color::Yellow,
            ThemeColor::Error => Color::Red,
        }
    }
}

pub fn colored_println(stdout: &mut Stdout, color: ThemeColor, content: &str) {
    let _ = execute!(
        stdout,
        SetForegroundColor(color.into()),
        Print(content),
        ResetColor,
        Print("\n"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color() {
        assert_eq!(Color::from(ThemeColor::Error), Color::Red);
        assert_eq!(Color::from(ThemeColor::Success), Color::Green);
    }

    #[test]
    fn test_colored_println() {
        colored_println(&mut std::io::stdout(), ThemeColor::Warn, "test");
    }
}
