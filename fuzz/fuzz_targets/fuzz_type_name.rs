#![no_main]

use libfuzzer_sys::fuzz_target;

use cfgdefaults::{catalog, Introspector};

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let registry = catalog::builtin();
        let mut sink = Vec::new();
        let _ = Introspector::new(&registry).print_defaults(name, &mut sink);
    }
});
