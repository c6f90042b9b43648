/// Internal macro holding the file-writing logic behind `enumforge_log!`.
#[macro_export]
#[doc(hidden)]
macro_rules! __enumforge_log_impl {
    ($content:expr, $filename:expr, $append:expr) => {{
        #[cfg(feature = "dev-mode")]
        {
            use std::io::Write;

            if let Ok(logs_dir) = std::env::var("ENUMFORGE_LOG_DIR") {
                let _ = std::fs::create_dir_all(&logs_dir);
                let path = std::path::Path::new(&logs_dir).join($filename);

                let mut options = std::fs::OpenOptions::new();
                options.create(true);
                if $append {
                    options.append(true);
                } else {
                    options.write(true).truncate(true);
                }

                if let Ok(mut file_handle) = options.open(&path) {
                    let _ = writeln!(file_handle, "[{}:{}]\n{}", file!(), line!(), $content);
                }
            }
        }
        #[cfg(not(feature = "dev-mode"))]
        {
            let _ = &$content;
        }
    }};
}

/// Debug dump macro for the enumforge crates.
///
/// Writes into `$ENUMFORGE_LOG_DIR` when the `dev-mode` feature is enabled and
/// the variable is set; otherwise it does nothing.
///
/// # Examples
///
/// Dump to the default file, overwriting it:
/// ```no_run
/// # use enumforge_core::enumforge_log;
/// enumforge_log!("generation started");
/// ```
///
/// Append to a specific file:
/// ```no_run
/// # use enumforge_core::enumforge_log;
/// enumforge_log!(format!("emitted {} bytes", 42), "writer.log", true);
/// ```
#[macro_export]
macro_rules! enumforge_log {
    ($content:expr) => {{
        $crate::__enumforge_log_impl!($content, "enumforge.log", false);
    }};
    ($content:expr, $filename:expr) => {{
        $crate::__enumforge_log_impl!($content, $filename, false);
    }};
    ($content:expr, $filename:expr, $append:expr) => {{
        $crate::__enumforge_log_impl!($content, $filename, $append);
    }};
}
