// This is a part of rust-encoding.
// Copyright (c) 2013-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing.

/// Feeds `processed ++ unprocessed` and expects that only `processed` gets consumed
/// without any error, writing `output`.
macro_rules! assert_feed_ok {
    ($this:expr, $processed:expr, $unprocessed:expr, $output:expr) => {{
        let processed_v = $processed;
        let processed = $this.test_norm_input(&processed_v);
        let unprocessed_v = $unprocessed;
        let unprocessed = $this.test_norm_input(&unprocessed_v);
        let output_v = $output;
        let output = $this.test_norm_output(&output_v);
        let input = $this.test_concat(processed, unprocessed);
        let (result, nprocessed, buf) = $this.test_feed(&input, false);
        let expected = $this.test_units(processed);
        assert!(result == $crate::types::CoderResult::Underflow && nprocessed == expected,
                "raw_feed should return {:?}, but instead returned {:?}",
                ($crate::types::CoderResult::Underflow, expected), (result, nprocessed));
        assert!(output == &buf[..],
                "raw_feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
    }};
}

/// Feeds `processed ++ problem ++ remaining` and expects an error covering exactly `problem`,
/// after writing `output` for `processed`.
macro_rules! assert_feed_err {
    ($this:expr, $processed:expr, $problem:expr, $remaining:expr, $output:expr) => {{
        let processed_v = $processed;
        let processed = $this.test_norm_input(&processed_v);
        let problem_v = $problem;
        let problem = $this.test_norm_input(&problem_v);
        let remaining_v = $remaining;
        let remaining = $this.test_norm_input(&remaining_v);
        let output_v = $output;
        let output = $this.test_norm_output(&output_v);
        let input = $this.test_concat(processed, problem);
        let input = $this.test_concat(&input, remaining);
        let (result, nprocessed, buf) = $this.test_feed(&input, false);
        let expected = ($this.test_units(processed), Some($this.test_units(problem)));
        assert!((nprocessed, result.error_len()) == expected,
                "raw_feed should return {:?}, but instead returned {:?}",
                expected, (nprocessed, result));
        assert!(output == &buf[..],
                "raw_feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
    }};
}

/// Feeds `input` and expects exactly `result` after consuming `processed` units and writing `output`.
macro_rules! assert_feed_result {
    ($this:expr, $input:expr, $result:expr, $processed:expr, $output:expr) => {{
        let input_v = $input;
        let input = $this.test_norm_input(&input_v);
        let output_v = $output;
        let output = $this.test_norm_output(&output_v);
        let (result, nprocessed, buf) = $this.test_feed(input, false);
        assert!((result, nprocessed) == ($result, $processed),
                "raw_feed should return {:?}, but instead returned {:?}",
                ($result, $processed), (result, nprocessed));
        assert!(output == &buf[..],
                "raw_feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
    }};
}

/// Feeds `processed ++ problem` as the last input and expects `problem` to be
/// reported as an incomplete (malformed) sequence.
macro_rules! assert_feed_last_err {
    ($this:expr, $processed:expr, $problem:expr, $output:expr) => {{
        let processed_v = $processed;
        let processed = $this.test_norm_input(&processed_v);
        let problem_v = $problem;
        let problem = $this.test_norm_input(&problem_v);
        let output_v = $output;
        let output = $this.test_norm_output(&output_v);
        let input = $this.test_concat(processed, problem);
        let (result, nprocessed, buf) = $this.test_feed(&input, true);
        let expected = ($crate::types::CoderResult::Malformed($this.test_units(problem)),
                        $this.test_units(processed));
        assert!((result, nprocessed) == expected,
                "feed should return {:?}, but instead returned {:?}", expected, (result, nprocessed));
        assert!(output == &buf[..],
                "feed should push {:?}, but instead pushed {:?}", output, &buf[..]);
    }};
}

macro_rules! assert_finish_ok {
    ($this:expr, $output:expr) => {{
        let output_v = $output;
        let output = $this.test_norm_output(&output_v);
        let (result, buf) = $this.test_finish();
        assert!(result == $crate::types::CoderResult::Underflow,
                "raw_finish should return Underflow, but instead returned {:?}", result);
        assert!(output == &buf[..],
                "raw_finish should push {:?}, but instead pushed {:?}", output, &buf[..]);
    }};
}

/// Installs a test logger once; `RUST_LOG` controls the output.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decodes `input` through a fresh decoder in pieces of `chunk` bytes,
/// carrying unconsumed bytes over to the next piece.
pub fn decode_in_chunks(decoder: &mut dyn crate::types::RawDecoder, input: &[u8], chunk: usize)
                        -> Result<String, (crate::types::CoderResult, usize)> {
    use crate::types::{ByteReader, CharWriter, CoderResult};

    let mut ret = String::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut offset = 0;
    let mut buf = ['\0'; 64];
    for piece in input.chunks(chunk.max(1)) {
        pending.extend_from_slice(piece);
        let last = offset + pending.len() == input.len();
        let mut reader = ByteReader::new(&pending);
        loop {
            let mut writer = CharWriter::new(&mut buf);
            let result = decoder.feed(&mut reader, &mut writer, last);
            ret.extend(writer.written());
            match result {
                CoderResult::Overflow => {}
                CoderResult::Underflow => break,
                err => return Err((err, offset + reader.position())),
            }
        }
        let consumed = reader.position();
        pending.drain(..consumed);
        offset += consumed;
    }
    Ok(ret)
}
