//! Frame extraction must not depend on how the input stream is chunked.

use proptest::prelude::*;
use serde_json::json;

use phrase_lsp::rpc::{FrameSplitter, decode_message, encode_message};

/// Feeds `stream` split at `cuts` and collects every frame produced.
fn frames_from_segments(stream: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut splitter = FrameSplitter::new();
    let mut frames = Vec::new();

    let mut start = 0;
    for &cut in cuts.iter().chain(std::iter::once(&stream.len())) {
        splitter.feed(&stream[start..cut]);
        while let Some(frame) = splitter.next_frame().unwrap() {
            frames.push(frame);
        }
        start = cut;
    }
    frames
}

proptest! {
    // Cutting the stream anywhere, any number of times, changes nothing
    #[test]
    fn frames_survive_arbitrary_chunking(
        texts in prop::collection::vec("[ -~]{0,40}", 1..4),
        cut_indices in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let messages: Vec<Vec<u8>> = texts
            .iter()
            .map(|text| encode_message(&json!({"method": "textDocument/didChange", "params": {"text": text}})))
            .collect();
        let stream: Vec<u8> = messages.concat();

        let mut cuts: Vec<usize> = cut_indices
            .iter()
            .map(|index| index.index(stream.len() + 1))
            .collect();
        cuts.sort_unstable();

        let frames = frames_from_segments(&stream, &cuts);
        prop_assert_eq!(frames, messages);
    }

    // One byte per feed is the worst case and must still work
    #[test]
    fn byte_at_a_time_recovers_every_frame(
        texts in prop::collection::vec("[ -~]{0,20}", 1..3),
    ) {
        let messages: Vec<Vec<u8>> = texts
            .iter()
            .map(|text| encode_message(&json!({"method": "textDocument/hover", "params": {"text": text}})))
            .collect();
        let stream: Vec<u8> = messages.concat();

        let cuts: Vec<usize> = (0..stream.len()).collect();
        let frames = frames_from_segments(&stream, &cuts);
        prop_assert_eq!(frames, messages);
    }

    // Arbitrary bytes may be rejected but never panic, and discard always
    // returns the splitter to a clean state
    #[test]
    fn splitter_survives_arbitrary_bytes(chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..8)) {
        let mut splitter = FrameSplitter::new();
        for chunk in &chunks {
            splitter.feed(chunk);
            loop {
                match splitter.next_frame() {
                    Ok(Some(_)) => continue,
                    Ok(None) => break,
                    Err(_) => {
                        splitter.discard();
                        prop_assert!(splitter.is_empty());
                        break;
                    }
                }
            }
        }
    }

    // Whatever was encoded comes back out of decode unchanged
    #[test]
    fn decode_inverts_encode_for_any_text(method in "[a-zA-Z/]{1,30}", text in "\\PC{0,60}") {
        let payload = json!({"method": method, "params": {"text": text}});

        let encoded = encode_message(&payload);
        let (decoded_method, body) = decode_message(&encoded).unwrap();

        prop_assert_eq!(decoded_method, payload["method"].as_str().unwrap());
        prop_assert_eq!(body, serde_json::to_vec(&payload).unwrap());
    }
}
