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
//! Clubroom site entry point.
//!
//! In the browser this mounts the app. Native builds only check that the
//! configured base URL yields a valid route table and point at the wasm build.

#[cfg(target_arch = "wasm32")]
fn main() {
    clubroom_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let table = clubroom_routes::RouteTable::club(clubroom_routes::BaseUrl::from_env()?)?;
    writeln!(io::stderr().lock(), "{}", native_notice(&table))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice(table: &clubroom_routes::RouteTable) -> String {
    format!(
        "clubroom site: {} routes under {}; serve it with `trunk serve` or build for wasm32-unknown-unknown",
        table.routes().len(),
        table.base()
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use clubroom_routes::{BaseUrl, RouteTable};
    use std::error::Error;

    #[test]
    fn native_notice_names_the_mounted_base() -> Result<(), Box<dyn Error>> {
        let table = RouteTable::club(BaseUrl::parse("/club")?)?;
        let notice = native_notice(&table);
        assert!(notice.contains("18 routes under /club/"), "{notice}");
        assert!(notice.contains("wasm32-unknown-unknown"));
        Ok(())
    }
}
