#![no_main]
use fuzz::{run_fuzz_oh, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

/// Long inputs make the minute-by-minute scan too slow to be useful.
const MAX_INPUT_LEN: usize = 256;

fuzz_target!(|data: Data| -> Corpus {
    if data.oh.len() > MAX_INPUT_LEN || data.holidays.len() > 32 {
        return Corpus::Reject;
    }

    if run_fuzz_oh(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
