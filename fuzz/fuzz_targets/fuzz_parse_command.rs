#![no_main]
use evfleet::console::MenuCommand;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);
    // Any accepted command must round-trip through its keyword
    if let Ok(cmd) = line.parse::<MenuCommand>() {
        assert_eq!(cmd.keyword().parse::<MenuCommand>().ok(), Some(cmd));
    }
});
