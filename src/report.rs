// Console reporting: leveled, colored prefixes. Presentation only, nothing
// here changes program behavior.

use crossterm::style::Stylize;

/// Leveled console reporter. Debug lines are suppressed unless the verbose
/// flag was set; errors go to stderr, everything else to stdout.
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Reporter { verbose }
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", "INFO:".blue(), message);
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "SUCCESS:".green(), message);
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "WARNING:".yellow(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR:".red(), message);
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "DEBUG:".dark_grey(), message);
        }
    }

    pub fn divider(&self) {
        println!("{}", "----------------------------------------".dark_grey());
    }
}
