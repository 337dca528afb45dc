/*! Integration tests for ordict.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - odict: Tests for the core container (addressing, mutation, ordering)
 * - construction: Tests for the bulk constructors and KeyedSource interop
 * - search: Tests for key/value search and filtering
 * - elementwise: Tests for map/from_each/to_each over list-valued entries
 * - nested: Tests for the recursive tree helpers and KeyedTree interop
 * - serialization: Tests for the (key, value) pair serde round-trip
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("ordict=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod nested;
mod search;
mod serialization;
