#![no_main]

use libfuzzer_sys::fuzz_target;

use dutydraw_core::constants::IDENTITY_COLUMNS;
use dutydraw_core::dataset::Dataset;

fuzz_target!(|data: &[u8]| {
    let Ok(ds) = Dataset::from_bytes(data) else {
        return;
    };
    let columns = ds.columns();
    assert!(columns.len() >= IDENTITY_COLUMNS);
    assert_eq!(ds.periods().len(), columns.len() - IDENTITY_COLUMNS);
    for value in ds.universe() {
        assert!(!value.trim().is_empty(), "blank value in universe");
    }
});
