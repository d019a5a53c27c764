use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

impl OutputFormat {
    fn is_human(self) -> bool {
        matches!(self, OutputFormat::Human)
    }
}

/// Message severity; doubles as the "type" field of the json envelope
#[derive(Clone, Copy)]
enum MessageKind {
    Success,
    Warning,
    Info,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Info => "info",
        }
    }

    fn glyph(self) -> Option<String> {
        match self {
            MessageKind::Success => Some("✓".green().to_string()),
            MessageKind::Warning => Some("⚠".yellow().to_string()),
            MessageKind::Info => None,
        }
    }
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.emit(MessageKind::Success, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.emit(MessageKind::Warning, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.emit(MessageKind::Info, msg.as_ref());
    }

    /// Plain line without a glyph; wrapped as an info envelope in json modes
    pub fn println(&self, msg: impl AsRef<str>) {
        self.emit(MessageKind::Info, msg.as_ref());
    }

    /// Errors bypass quiet mode; in human output they go to stderr
    pub fn error(&self, msg: impl AsRef<str>) {
        if self.format.is_human() {
            eprintln!("{} {}", "✗".red(), msg.as_ref());
        } else {
            self.print_json(&json!({
                "type": "error",
                "message": msg.as_ref(),
            }));
        }
    }

    /// Structured payload for the json modes
    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet {
            return;
        }
        self.print_json(data);
    }

    fn emit(&self, kind: MessageKind, msg: &str) {
        if self.quiet {
            return;
        }
        if self.format.is_human() {
            match kind.glyph() {
                Some(glyph) => println!("{} {}", glyph, msg),
                None => println!("{}", msg),
            }
        } else {
            self.print_json(&json!({
                "type": kind.tag(),
                "message": msg,
            }));
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        let rendered = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data),
            _ => serde_json::to_string(data),
        };
        println!("{}", rendered.unwrap_or_default());
    }
}
