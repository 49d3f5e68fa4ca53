#![no_main]

use libfuzzer_sys::fuzz_target;
use tfaffected::{classify, DirPath, GitRef};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Some(dir) = DirPath::parse(raw) {
            let _ = classify(&dir);
            assert_eq!(DirPath::parse(&dir.to_string()), Some(dir));
        }
        let _ = DirPath::parent_of_file(raw);
        let _ = GitRef::parse(raw);
    }
});
