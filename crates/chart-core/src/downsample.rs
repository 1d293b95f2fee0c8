// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets reduction for long index-ordered series.

/// LTTB over values placed at their index on the x axis.
/// Returns the indices of up to `threshold` kept points, ascending, always including first and last.
pub fn lttb_indices(values: &[f64], threshold: usize) -> Vec<usize> {
    let n = values.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return (0..n).collect(); }
    if threshold == 1 { return vec![0]; }
    if threshold == 2 { return vec![0, n - 1]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(0);

    let mut a = 0usize; // index selected from the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = ((1.0 + ((i + 1) as f64) * bucket_size).floor() as usize).min(n - 1);

        // average of the next bucket
        let next_end = ((1.0 + ((i + 2) as f64) * bucket_size).floor() as usize).min(n);
        let rs = end.max(1);
        let re = next_end.max(rs + 1).min(n);
        let count = (re - rs).max(1) as f64;
        let avg_x = (rs..re).map(|k| k as f64).sum::<f64>() / count;
        let avg_y = values[rs..re].iter().sum::<f64>() / count;

        let a_x = a as f64;
        let a_y = values[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            let area = ((a_x - k as f64) * (avg_y - a_y) - (a_x - avg_x) * (values[k] - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(max_idx);
        a = max_idx;
    }

    sampled.push(n - 1);
    sampled
}
