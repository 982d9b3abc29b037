#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use dutydraw_core::dataset::Dataset;
use dutydraw_core::session::DrawSession;

fuzz_target!(|data: &[u8]| {
    let Ok(ds) = Dataset::from_bytes(data) else {
        return;
    };
    let ds = Arc::new(ds);
    let mut session = DrawSession::new(Arc::clone(&ds));

    for period in 0..ds.periods().len() {
        session.select_index(period).unwrap();
        assert_eq!(session.cursor(), 0);
        // One extra trigger must be a no-op.
        for step in 0..=ds.len() {
            let revealed = session.trigger().map(|draw| draw.index).ok();
            if step < ds.len() {
                assert_eq!(revealed, Some(step));
            } else {
                assert_eq!(revealed, None);
            }
        }
        assert_eq!(session.cursor(), ds.len());
    }
});
