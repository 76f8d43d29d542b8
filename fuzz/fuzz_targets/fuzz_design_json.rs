#![no_main]

use libfuzzer_sys::fuzz_target;
use rackfilter_dsp::{DesignedFilter, SampleFilter};
use rackfilter_spec::{parse_design, validate_design};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(design) = parse_design(json) else {
        return;
    };
    if !validate_design(&design).is_ok() {
        return;
    }
    // Validated designs must realize and process without panicking
    if let Ok(mut filter) = DesignedFilter::<f32>::from_design(&design) {
        let mut buffer = [1.0f32, 0.0, -1.0, 0.5, 0.0, 0.0, 0.25, -0.25];
        filter.process_buffer(&mut buffer);
    }
});
