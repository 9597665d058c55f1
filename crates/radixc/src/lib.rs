//! Radix converter driver.
//!
//! Composes the three cores into the flow a converter window runs:
//!
//! ```text
//! edit ──► Session::input ──► radix_eval (expressions)
//!                        └──► radix_format::convert_field (plain values)
//!                                     │
//!                                     ▼
//!                               NumberValues ──► radix_highlight (hover)
//! ```
//!
//! # Debugging
//!
//! - `RUST_LOG=radix_eval=trace`: why each expression was rejected.
//! - `RUST_LOG=radixc=debug`: the outcome of every edit.
//! - `RADIX_LOG_TREE=1`: indented span tree instead of flat lines.

use std::sync::Once;

pub mod commands;
mod session;

pub use session::{InputOutcome, Session};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let tree = std::env::var_os("RADIX_LOG_TREE").is_some();
        tracing_subscriber::registry()
            .with(tree.then(|| {
                tracing_tree::HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
            }))
            .with((!tree).then(|| {
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
            }))
            .with(EnvFilter::from_default_env())
            .init();
    });
}
