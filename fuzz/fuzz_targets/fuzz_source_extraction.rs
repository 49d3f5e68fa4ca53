#![no_main]

use libfuzzer_sys::fuzz_target;
use tfaffected::domain::services::extract_module_references;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        for reference in extract_module_references("svc/prod/main.tf", content) {
            let _ = reference.resolve();
        }
    }
});
