#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Page script entry point. Native builds only print how to build for the browser.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    spendlog_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    stderr.write_all(
        b"spendlog-ui only runs inside the browser. Build the page script with `trunk build` \
          (or `cargo build --target wasm32-unknown-unknown`) and load it after Bootstrap.\n",
    )?;
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_stub_exits_cleanly() -> std::io::Result<()> {
        main()
    }
}
