use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// Writes `log` records to the browser console, or stdout off the web
pub struct Logger;

impl Logger {
    /// Installs the logger and sets the maximum level.  Fails if another logger already owns the
    /// `log` facade; records then go to that logger instead.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }

    fn format(record: &Record) -> String {
        format!(
            "{:<5} [{}] {}",
            record.level(),
            record.module_path().unwrap_or_default(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn flush(&self) {}

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            io::puts(record.level(), &Self::format(record));
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod io {
            use log::Level;

            use wasm_bindgen::prelude::*;

            #[wasm_bindgen]
            extern "C" {
                #[wasm_bindgen(js_namespace = console, js_name = log)]
                fn console_log(s: &str);

                #[wasm_bindgen(js_namespace = console, js_name = warn)]
                fn console_warn(s: &str);

                #[wasm_bindgen(js_namespace = console, js_name = error)]
                fn console_error(s: &str);
            }

            pub fn puts(level: Level, s: &str) {
                match level {
                    Level::Error => console_error(s),
                    Level::Warn => console_warn(s),
                    _ => console_log(s),
                }
            }
        }
    } else {
        mod io {
            use log::Level;

            pub fn puts(_level: Level, s: &str) {
                println!("{}", s);
            }
        }
    }
}

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parses `error`, `warn`, `info`, `debug`, `trace` or `off`, ignoring case
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}
