//! Launch arguments injected by the host development tool
//!
//! Xcode appends `-NSDocumentRevisionsDebugMode YES` when it runs the app.
//! The single-dash long form is not something clap accepts, so it is
//! rewritten to the hidden `--NSDocumentRevisionsDebugMode` option before
//! parsing.

use std::ffi::OsString;

/// Flag as passed by the host tool
pub const HOST_DEBUG_FLAG: &str = "-NSDocumentRevisionsDebugMode";

/// Rewrite the single-dash host debug flag into its double-dash form.
/// All other arguments are passed through untouched.
pub fn normalize_host_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if is_host_debug_flag(&arg) {
                let mut rewritten = OsString::from("-");
                rewritten.push(&arg);
                rewritten
            } else {
                arg
            }
        })
        .collect()
}

fn is_host_debug_flag(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|s| {
        s == HOST_DEBUG_FLAG
            || s.strip_prefix(HOST_DEBUG_FLAG)
                .is_some_and(|rest| rest.starts_with('='))
    })
}
