use rayon::prelude::*;

/// Apply a function to each destination row in parallel.
///
/// The destination buffer is split into disjoint row chunks of
/// `row_stride` elements; each worker gets a reusable scratch buffer of
/// `scratch_len` floats for the mapped source coordinates of its current
/// row. The function receives the row index, the scratch buffer, and the
/// mutable row slice.
pub fn par_iter_rows_warp<T: Send>(
    dst: &mut [T],
    row_stride: usize,
    scratch_len: usize,
    f: impl Fn(usize, &mut [f32], &mut [T]) + Send + Sync,
) {
    dst.par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each_init(
            || vec![0f32; scratch_len],
            |scratch, (row, dst_row)| {
                f(row, scratch, dst_row);
            },
        );
}

#[cfg(test)]
mod tests {
    use super::par_iter_rows_warp;

    #[test]
    fn rows_are_independent() {
        let mut dst = vec![0u32; 12];
        par_iter_rows_warp(&mut dst, 4, 2, |row, scratch, dst_row| {
            assert_eq!(scratch.len(), 2);
            for (i, v) in dst_row.iter_mut().enumerate() {
                *v = (row * 10 + i) as u32;
            }
        });
        assert_eq!(dst, vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
    }
}
