//! Fuzz target for request input handling.
//!
//! Arbitrary bytes are fed through every path that turns client input into
//! typed values: JSON product bodies, path identifiers and listing query
//! parameters. None of them may panic.
//!
//! ```bash
//! cargo +nightly install cargo-fuzz
//! cargo +nightly fuzz run fuzz_payloads -- -max_total_time=60
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use product_catalog::models::{ListParams, ProductPayload};
use product_catalog::query::run_query;
use product_catalog::store::seed_products;
use product_catalog::validation::{parse_product_id, validate_product};

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<ProductPayload>(data) {
        let _ = validate_product(&payload);
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_product_id(text);

    let pairs = text
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")));
    let params = ListParams::from_pairs(pairs);
    let page = run_query(&seed_products(), &params.into_query());
    assert!(page.count <= page.total);
});
