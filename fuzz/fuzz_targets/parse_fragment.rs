#![no_main]
use libfuzzer_sys::fuzz_target;
use markseg::markup::Parser;

fuzz_target!(|data: &[u8]| {
    let _ = Parser::new(data).parse();
});
