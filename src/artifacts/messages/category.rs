use colored::{Color, ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Warning,
    Failure,
    Information,
    Error,
}

impl Category {
    pub fn color(&self) -> Color {
        match self {
            Category::Success => Color::Green,
            Category::Warning | Category::Information => Color::Yellow,
            Category::Failure | Category::Error => Color::Red,
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.color(self.color())
    }
}
