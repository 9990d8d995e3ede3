//! Rate scheduling
//!
//! Converts the signed rate control and the presented-frame counter into a
//! per-frame simulation step count. Negative rates run sub-frame-rate (one
//! step every few frames), non-negative rates run one or more steps every
//! frame; the boundary sits at rate 0 = exactly one step per frame.

/// Number of simulation steps to execute this frame
///
/// Pure function of its two inputs:
/// - `rate < 0`: one step when `frame_counter` is a multiple of
///   `-rate + 1`, otherwise zero. Rate -1 steps every other frame.
/// - `rate >= 0`: `rate + 1` steps, every frame.
///
/// `frame_counter` must count presented frames (incremented whether or not
/// a step ran, paused or not), never simulation ticks; feeding the tick
/// counter here would collapse the slow-rate periodicity.
pub fn iterations_this_frame(rate: i32, frame_counter: u64) -> u32 {
    if rate < 0 {
        let period = (-(rate as i64) + 1) as u64;
        if frame_counter % period == 0 {
            1
        } else {
            0
        }
    } else {
        rate as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rate_periodicity() {
        for frame in 0..100 {
            let expected = if frame % 5 == 0 { 1 } else { 0 };
            assert_eq!(iterations_this_frame(-4, frame), expected);
        }
    }

    #[test]
    fn test_positive_rate_steps_every_frame() {
        for frame in 0..100 {
            assert_eq!(iterations_this_frame(3, frame), 4);
        }
    }

    #[test]
    fn test_rate_zero_is_real_time() {
        assert_eq!(iterations_this_frame(0, 0), 1);
        assert_eq!(iterations_this_frame(0, 7), 1);
    }

    #[test]
    fn test_rate_minus_one_skips_alternate_frames() {
        assert_eq!(iterations_this_frame(-1, 0), 1);
        assert_eq!(iterations_this_frame(-1, 1), 0);
        assert_eq!(iterations_this_frame(-1, 2), 1);
    }

    #[test]
    fn test_extreme_rates_do_not_overflow() {
        assert_eq!(iterations_this_frame(i32::MIN, 0), 1);
        assert_eq!(iterations_this_frame(i32::MIN, 1), 0);
        assert_eq!(iterations_this_frame(i32::MAX, 3), i32::MAX as u32 + 1);
    }
}
