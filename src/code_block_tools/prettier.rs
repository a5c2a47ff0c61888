//! Prettier, driven over stdin/stdout.

use super::engine::{EngineError, FormatRequest, FormattingEngine};
use super::executor::ToolExecutor;

/// Default command; resolved through `PATH`.
pub const DEFAULT_COMMAND: &str = "prettier";

/// Formats code by running the prettier CLI once per block.
#[derive(Debug, Clone)]
pub struct PrettierEngine {
    command: Vec<String>,
    executor: ToolExecutor,
}

impl PrettierEngine {
    /// `command` is the program plus any fixed leading arguments
    /// (e.g. `["npx", "prettier"]`). An empty command falls back to `prettier`.
    pub fn new(command: Vec<String>, timeout_ms: u64) -> Self {
        let command = if command.is_empty() {
            vec![DEFAULT_COMMAND.to_string()]
        } else {
            command
        };
        Self {
            command,
            executor: ToolExecutor::new(timeout_ms),
        }
    }

    /// Arguments appended after the configured command for one request.
    pub fn arguments(request: &FormatRequest<'_>) -> Vec<String> {
        let options = request.options;
        let mut args = vec![
            "--parser".to_string(),
            request.parser.as_str().to_string(),
            "--tab-width".to_string(),
            options.indent_size.get().to_string(),
        ];
        if options.indent_with_tabs {
            args.push("--use-tabs".to_string());
        }
        args.push("--print-width".to_string());
        args.push(options.print_width.get().to_string());
        args
    }
}

impl FormattingEngine for PrettierEngine {
    fn name(&self) -> &'static str {
        "prettier"
    }

    fn format(&self, request: &FormatRequest<'_>) -> Result<String, EngineError> {
        let args = Self::arguments(request);
        log::debug!("Running {} {}", self.command.join(" "), args.join(" "));
        Ok(self.executor.run_filter(&self.command, &args, request.source)?)
    }
}
