/// Logs a success line. Rendered with the `[+]` symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "contractr::success", $($arg)*)
    };
}
