//! Fuzz identifier parsing and encoding: arbitrary bytes must never panic,
//! and anything that parses must encode to a well-formed 95-bar symbol.

#![no_main]

use libfuzzer_sys::fuzz_target;

use linea_core::Identifier;
use linea_symbol::{EncodedCode, ELEMENT_COUNT, TOTAL_BARS};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(id) = s.parse::<Identifier>() {
        let code = EncodedCode::from_identifier(&id);
        assert_eq!(code.bars().len(), TOTAL_BARS);
        assert_eq!(code.elements().len(), ELEMENT_COUNT);
        assert_eq!(code.dashed_bars().replace('-', ""), code.bars().to_string());
    }
});
