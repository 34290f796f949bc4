/// Points for a dictionary word of the given length, in spelled letters.
pub fn score_for_length(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
