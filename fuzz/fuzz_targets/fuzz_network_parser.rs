#![no_main]

use libfuzzer_sys::fuzz_target;
use network_editor::network_file::{parse_network, write_network};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Was geparst wird, muss sich verlustfrei neu schreiben und lesen lassen
    if let Ok(model) = parse_network(text) {
        let written = write_network(&model);
        let reparsed = parse_network(&written).expect("geschriebene Datei ist lesbar");
        assert_eq!(write_network(&reparsed), written);
    }
});
