//! Output Rendering
//!
//! Human-readable console output for deployment runs. JSON output goes
//! through `infrastructure::JsonEventSink` instead.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::config::NetworkProfile;
use crate::domain::entities::DeploymentReport;
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::{Address, Stage};

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
struct Icons {
    check: &'static str,
    cross: &'static str,
    progress: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            progress: "●",
            arrow: "↳",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            progress: "[..]",
            arrow: "->",
        }
    }
}

/// Terminal features the console output may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
}

impl ConsoleStyle {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}

/// The line printed for each deployed module
pub fn render_module_line(
    stage: Stage,
    address: &Address,
    profile: Option<&NetworkProfile>,
    style: ConsoleStyle,
) -> String {
    let icons = style.icons();
    let mut line = format!(
        "{} {} deployed at: {}",
        style.paint(icons.check, Color::Green),
        stage.module(),
        address
    );
    if let Some(link) = profile.and_then(|p| p.explorer_link(address)) {
        line.push_str(&format!("\n    {} {}", icons.arrow, style.paint(&link, Color::DarkGrey)));
    }
    line
}

/// Constructor arguments of each module, for manual verification
pub fn render_verification_hints(report: &DeploymentReport) -> String {
    let mut out = String::from("Constructor arguments (for verification):\n");
    for module in report.iter() {
        let args: Vec<&str> = module.constructor_args.iter().map(|a| a.as_str()).collect();
        let args = if args.is_empty() {
            "(none)".to_string()
        } else {
            args.join(" ")
        };
        out.push_str(&format!("  {} {}: {}\n", module.module_name(), module.address, args));
    }
    out
}

/// What an operator needs after a failed run: what is already on chain.
pub fn render_partial_report(
    report: &DeploymentReport,
    profile: Option<&NetworkProfile>,
    style: ConsoleStyle,
) -> String {
    if report.is_empty() {
        return "Nothing was deployed.".to_string();
    }

    let mut out = format!(
        "Deployed before the failure ({} of {}):",
        report.len(),
        Stage::ALL.len()
    );
    for module in report.iter() {
        out.push_str("\n  ");
        out.push_str(
            &render_module_line(module.stage, &module.address, profile, style)
                .replace('\n', "\n  "),
        );
    }
    out
}

/// Event sink printing progress lines for humans
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    style: ConsoleStyle,
    profile: Option<NetworkProfile>,
}

impl ConsoleEventSink {
    pub fn stdout(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            style,
            profile: None,
        }
    }

    /// Add explorer links from `profile` to deployed-module lines
    pub fn with_profile(mut self, profile: NetworkProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let icons = self.style.icons();
        match event {
            DeployEvent::StageStarted { stage } => self.line(&format!(
                "{} Deploying {}...",
                self.style.paint(icons.progress, Color::Yellow),
                stage.module()
            )),
            DeployEvent::StageDeployed { stage, address } => self.line(&render_module_line(
                stage,
                &address,
                self.profile.as_ref(),
                self.style,
            )),
            DeployEvent::StageFailed { stage, error } => self.line(&format!(
                "{} {} failed: {}",
                self.style.paint(icons.cross, Color::Red),
                stage.module(),
                error
            )),
            DeployEvent::Completed { deployed_count } => self.line(&format!(
                "{} Deployment complete ({} modules).",
                self.style.paint(icons.check, Color::Green),
                deployed_count
            )),
            DeployEvent::Started { .. }
            | DeployEvent::ConfigurationLoaded
            | DeployEvent::Failed { .. } => {}
        }
    }
}
