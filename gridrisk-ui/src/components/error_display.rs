//! Failure notices for the dashboard.

use dioxus::prelude::*;

/// How a notice is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    /// The action failed and must be re-triggered by the user.
    #[default]
    Error,
    /// Something degraded but the rest of the dashboard still works.
    Warning,
}

impl Severity {
    fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error: ",
            Severity::Warning => "Warning: ",
        }
    }

    fn style(&self) -> &'static str {
        match self {
            Severity::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
            Severity::Warning => "background: #FFF8E1; color: #8D6E00; border: 1px solid #FFE082;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default)]
    pub severity: Severity,
    /// What the user can do about it; omitted when empty.
    #[props(default = String::new())]
    pub hint: String,
}

/// Displays a failure with its severity and an optional next step.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = format!(
        "padding: 12px 16px; margin: 8px 0; border-radius: 4px; {}",
        props.severity.style()
    );
    let label = props.severity.label();

    rsx! {
        div {
            style: "{style}",
            role: "alert",
            strong { "{label}" }
            "{props.message}"
            if !props.hint.is_empty() {
                div {
                    style: "margin-top: 6px; font-size: 12px;",
                    "{props.hint}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_default_to_error() {
        assert_eq!(Severity::default(), Severity::Error);
        assert_eq!(Severity::Error.label(), "Error: ");
    }

    #[test]
    fn warnings_are_styled_apart_from_errors() {
        assert_eq!(Severity::Warning.label(), "Warning: ");
        assert_ne!(Severity::Warning.style(), Severity::Error.style());
    }
}
