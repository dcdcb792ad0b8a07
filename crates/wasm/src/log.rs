/// Console diagnostics. Debug lines only print when enabled in the config;
/// warnings always print.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn debug(self, message: &str) {
        if self.debug {
            gloo::console::debug!(format!("folio: {message}"));
        }
    }

    pub fn warn(self, message: &str) {
        gloo::console::warn!(format!("folio: {message}"));
    }
}
