use crate::arrangement::SlotOrder;

/// Which pass of a re-arrangement produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Text,
    Icon,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Text => "text",
            Stage::Icon => "icon",
        }
    }
}

/// Receives layout reports from a single widget instance.
pub trait DiagnosticSink {
    fn layout_changed(&self, widget: &str, stage: Stage, order: &SlotOrder);
}

/// Forwards reports to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn layout_changed(&self, widget: &str, stage: Stage, order: &SlotOrder) {
        log::debug!("[{widget}][update_layout]({}) {order}", stage.as_str());
    }
}
