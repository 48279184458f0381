use std::fmt;

use async_std::io::{self, prelude::*};
use colored::{Color, Colorize};

use crate::span::Span;

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::diagnostic::Diagnostic::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! spanned_error {
    ($span:expr, $($arg:tt)*) => {
        $crate::diagnostic::Diagnostic::error(format!($($arg)*)).with_span($span)
    };
}

#[macro_export]
macro_rules! note {
    ($($arg:tt)*) => {
        $crate::diagnostic::Diagnostic::new($crate::diagnostic::Level::Note, format!($($arg)*))
    };
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    message: String,
    span: Option<Span>,
    level: Level,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(level: Level, message: S) -> Diagnostic {
        Diagnostic {
            message: message.into(),
            span: None,
            level,
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Diagnostic {
        Diagnostic::new(Level::Error, message)
    }

    pub fn with_span(mut self, span: Span) -> Diagnostic {
        self.span = Some(span);
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Writes the diagnostic to stderr.
    pub async fn emit(self) {
        let mut stderr = io::stderr();
        let _ = stderr.write_all(format!("{self}\n").as_bytes()).await;
        let _ = stderr.flush().await;
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = self.level.color();
        write!(
            f,
            "{}{} {}",
            self.level.name().color(color).bold(),
            ":".bold(),
            self.message.bold()
        )?;

        if let Some(span) = &self.span {
            write!(f, "\n{}", span.pointer(color))?;
        }

        Ok(())
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.level == other.level
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Level {
    Error,
    Note,
}

impl Level {
    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Level::Error => Color::BrightRed,
            Level::Note => Color::BrightGreen,
        }
    }
}
