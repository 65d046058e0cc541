use super::{
    super::context::SortContext,
    insertion::insertion_range,
};

pub const TIM_RUN: usize = 32;

pub fn merge(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    merge_sort_range(ctx, data, 0, n);
}

fn merge_sort_range(ctx: &mut SortContext, data: &mut [i32], lo: usize, hi: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    ctx.record(data, &[lo, mid, hi - 1], format!("Split [{lo}..{hi}) at {mid}"));
    merge_sort_range(ctx, data, lo, mid);
    merge_sort_range(ctx, data, mid, hi);
    merge_runs(ctx, data, lo, mid, hi);
}

// Слияние соседних отсортированных участков [lo, mid) и [mid, hi).
// Каждое записанное значение учитывается как swap.
pub(crate) fn merge_runs(ctx: &mut SortContext, data: &mut [i32], lo: usize, mid: usize, hi: usize) {
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        let value = if ctx.compare(left[i], right[j]).is_le() {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        ctx.write(data, k, value);
        ctx.record(data, &[k], format!("Merge {value} into position {k}"));
        k += 1;
    }
    for &value in left[i..].iter().chain(right[j..].iter()) {
        ctx.write(data, k, value);
        ctx.record(data, &[k], format!("Copy {value} into position {k}"));
        k += 1;
    }
}

// Tim - сортировка вставками по участкам, затем слияния с удвоением ширины
pub fn tim(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let mut start = 0;
    while start < n {
        let end = (start + TIM_RUN).min(n);
        ctx.record(data, &[start, end - 1], format!("Sort run [{start}..{end})"));
        insertion_range(ctx, data, start, end);
        start = end;
    }

    let mut width = TIM_RUN;
    while width < n {
        ctx.record(data, &[], format!("Merge runs of width {width}"));
        let mut lo = 0;
        while lo < n {
            let mid = (lo + width).min(n);
            let hi = (lo + 2 * width).min(n);
            if mid < hi {
                merge_runs(ctx, data, lo, mid, hi);
            }
            lo += 2 * width;
        }
        width *= 2;
    }
}
