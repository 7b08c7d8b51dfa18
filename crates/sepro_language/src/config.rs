//! Configuration for a compile pass.

/// Options for [`crate::compile_with`] and [`crate::Parser::with_config`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Label for the source text (usually a file name), shown in diagnostics.
    pub source_name: Option<String>,

    /// Emit a trace event for every token the parser consumes.
    pub trace_tokens: bool,
}

impl CompilerConfig {
    /// Creates a configuration labelling diagnostics with `source_name`.
    #[must_use]
    pub fn named(source_name: impl Into<String>) -> Self {
        Self {
            source_name: Some(source_name.into()),
            ..Self::default()
        }
    }

    /// Creates a configuration with token tracing enabled.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            trace_tokens: true,
            ..Self::default()
        }
    }

    /// Builder method to set the source label.
    #[must_use]
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    /// Builder method to enable/disable token tracing.
    #[must_use]
    pub fn with_trace_tokens(mut self, trace: bool) -> Self {
        self.trace_tokens = trace;
        self
    }
}
