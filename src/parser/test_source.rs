/// Deterministic generator for balanced sources, including comments.
pub fn generate_source(seed: u64, len: usize) -> String {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let alphabet = b"<>+-,. x\n";
    let mut source = String::new();
    let mut open = 0;

    for _ in 0..len {
        match next() % 12 {
            0 => {
                source.push('[');
                open += 1;
            }
            1 if open > 0 => {
                source.push(']');
                open -= 1;
            }
            n => {
                let pick = usize::try_from(n).unwrap() % alphabet.len();
                source.push(char::from(alphabet[pick]));
            }
        }
    }

    source.extend(std::iter::repeat_n(']', open));
    source
}
