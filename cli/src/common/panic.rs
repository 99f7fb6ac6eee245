//! Panic handler for fatal faults.
//!
//! Out-of-range indexing, writes to a nil map and unchecked division by zero
//! all panic. The hook reports them on one line, with the location, instead
//! of the default backtrace hint.

use std::panic::PanicHookInfo;

/// Install the custom panic handler.
///
/// This should be called early in main() before any other initialization.
pub fn install_handler() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicHookInfo<'_>) {
    let fault = Fault::from_info(info);
    tracing::debug!(location = %fault.location, "Fatal fault");
    eprintln!("{fault}");
}

/// A panic, reduced to what the user needs to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub message: String,
    pub location: String,
}

impl Fault {
    fn from_info(info: &PanicHookInfo<'_>) -> Self {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("unknown");

        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            message: message.to_string(),
            location,
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fatal error: {} (at {})", self.message, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_display() {
        let fault = Fault {
            message: "assignment to entry in nil map".to_string(),
            location: "src/main.rs:1:1".to_string(),
        };
        assert_eq!(
            fault.to_string(),
            "fatal error: assignment to entry in nil map (at src/main.rs:1:1)"
        );
    }
}
