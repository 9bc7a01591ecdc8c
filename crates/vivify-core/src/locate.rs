//! Frame location: map a continuous time (or normalized progress) to a
//! discrete sample index.

/// Linear progress→time map over the playback window.
#[inline]
pub fn progress_to_time(progress: f64, start_time: f64, end_time: f64) -> f64 {
    (1.0 - progress) * start_time + progress * end_time
}

/// Index of the last timestamp ≤ `time` (predecessor search).
///
/// Clamps: `0` below the first sample, `len - 1` at or beyond the last.
/// Binary search via `partition_point`; timestamps are assumed sorted
/// ascending.
pub fn locate(timestamps: &[i64], time: f64) -> usize {
    let n = timestamps.len();
    if n == 0 {
        return 0;
    }
    let insertion = timestamps.partition_point(|&t| (t as f64) <= time);
    if insertion == 0 {
        0
    } else {
        (insertion - 1).min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predecessor_with_clamps() {
        let ts = [0, 5, 10];
        assert_eq!(locate(&ts, -1.0), 0);
        assert_eq!(locate(&ts, 0.0), 0);
        assert_eq!(locate(&ts, 4.0), 0);
        assert_eq!(locate(&ts, 5.0), 1);
        assert_eq!(locate(&ts, 9.9), 1);
        assert_eq!(locate(&ts, 10.0), 2);
        assert_eq!(locate(&ts, 100.0), 2);
    }

    #[test]
    fn duplicate_timestamps_resolve_to_last() {
        let ts = [0, 5, 5, 5, 10];
        assert_eq!(locate(&ts, 5.0), 3);
    }
}
