//! One-hot encoding of the episode termination flag.

/// One-hot vector for a step that terminates the episode.
pub const TERMINATE: [i32; 3] = [1, 0, 0];

/// One-hot vector for a step that does not terminate the episode.
pub const CONTINUE: [i32; 3] = [0, 1, 0];

/// Third category of the model's termination head.
///
/// Reserved: [`terminate_flag_to_one_hot`] never produces it.
pub const RESERVED: [i32; 3] = [0, 0, 1];

/// Encodes a dataset termination flag.
///
/// Exactly `1.0` maps to [`TERMINATE`]; every other value maps to [`CONTINUE`].
pub fn terminate_flag_to_one_hot(flag: f32) -> [i32; 3] {
    if flag == 1.0 {
        TERMINATE
    } else {
        CONTINUE
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_two_categories() {
        assert_eq!(terminate_flag_to_one_hot(1.0), [1, 0, 0]);
        assert_eq!(terminate_flag_to_one_hot(0.0), [0, 1, 0]);
        for flag in [-1.0f32, 0.5, 0.999, 2.0, f32::NAN].iter() {
            let v = terminate_flag_to_one_hot(*flag);
            assert_eq!(v, CONTINUE);
            assert_ne!(v, RESERVED);
            assert_eq!(v.iter().sum::<i32>(), 1);
        }
    }
}
