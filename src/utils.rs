use log;
use stderrlog::{self, ColorChoice, Timestamp};

/// Debug traces go to stderr so stdout stays a clean record of per-game
/// outcomes. Safe to call more than once; later calls are ignored.
pub fn init_log(verbose: bool) {
    let _ = stderrlog::new()
        .color(ColorChoice::Auto)
        .timestamp(Timestamp::Second)
        .show_module_names(true)
        .verbosity(if verbose { log::Level::Debug } else { log::Level::Error })
        .init();
}
