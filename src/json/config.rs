/// Options for encoding and decoding collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Indent encoded output
    pub pretty: bool,
    /// Reject unknown keys on decode instead of skipping them
    pub deny_unknown_fields: bool,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn deny_unknown_fields(mut self) -> Self {
        self.deny_unknown_fields = true;
        self
    }
}
