/*! Integration tests for dotstore.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for Doc, Value and path handling without a store
 * - provider: Tests for the Provider trait and its implementations
 * - store: Tests for the Store engine, run against the provider chosen by TEST_PROVIDER
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("dotstore=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod doc;
mod provider;
mod store;
