#![no_main]

use json_config_check::{check_document, CheckFailure};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Err(CheckFailure::Syntax(e)) = check_document(data) {
        assert!(e.offset <= data.len());
        assert!(e.line >= 1 && e.column >= 1);
    }
});
