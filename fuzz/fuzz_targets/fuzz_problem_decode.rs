#![no_main]

use libfuzzer_sys::fuzz_target;
use problem_details::Problem;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to the same value
    if let Ok(problem) = Problem::from_json_slice(data) {
        let encoded = problem.to_json_vec().expect("decoded problem must encode");
        let again = Problem::from_json_slice(&encoded).expect("encoded problem must decode");
        assert_eq!(problem, again);
    }
});
