use super::super::context::SortContext;
use std::collections::BTreeMap;

const RADIX: usize = 10;

// Плотный массив частот, пока диапазон значений сопоставим с длиной входа
const COUNTING_DENSE_FACTOR: u64 = 4;
const COUNTING_DENSE_SLACK: u64 = 64;

// Counting - частоты по смещению от минимума, поэтому отрицательные допустимы.
// На разреженном диапазоне частоты собираются в BTreeMap по значению.
pub fn counting(ctx: &mut SortContext, data: &mut [i32]) {
    let Some((min, max)) = ctx.min_max(data) else {
        return;
    };
    let span = (max as i64 - min as i64) as u64 + 1;
    let frequencies: Vec<(i32, usize)> =
        if span <= data.len() as u64 * COUNTING_DENSE_FACTOR + COUNTING_DENSE_SLACK {
            let mut counts = vec![0usize; span as usize];
            for &value in data.iter() {
                counts[(value as i64 - min as i64) as usize] += 1;
            }
            counts
                .into_iter()
                .enumerate()
                .filter(|&(_, count)| count > 0)
                .map(|(offset, count)| ((min as i64 + offset as i64) as i32, count))
                .collect()
        } else {
            let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
            for &value in data.iter() {
                *counts.entry(value).or_insert(0) += 1;
            }
            counts.into_iter().collect()
        };
    ctx.record(
        data,
        &[],
        format!("Counted {} distinct values from {min} to {max}", frequencies.len()),
    );

    let mut k = 0;
    for (value, count) in frequencies {
        for _ in 0..count {
            ctx.write(data, k, value);
            ctx.record(data, &[k], format!("Place {value} at {k}"));
            k += 1;
        }
    }
}

// Radix - LSD по основанию 10 над модулями.
// Отрицательные отделяются вперед, сортируются по модулю и разворачиваются.
pub fn radix(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let negatives: Vec<i32> = data.iter().copied().filter(|v| v.is_negative()).collect();
    let non_negatives: Vec<i32> = data.iter().copied().filter(|v| !v.is_negative()).collect();
    let split = negatives.len();
    for (k, value) in negatives.into_iter().chain(non_negatives).enumerate() {
        ctx.write(data, k, value);
    }
    ctx.record(data, &[], format!("Separated {split} negative values"));

    radix_region(ctx, data, 0, split, "negative");
    radix_region(ctx, data, split, n, "non-negative");

    // по возрастанию модуля отрицательные идут по убыванию значения
    let (mut i, mut j) = (0, split);
    while i + 1 < j {
        ctx.swap(data, i, j - 1);
        ctx.record(data, &[i, j - 1], "Reverse negative values");
        i += 1;
        j -= 1;
    }
}

#[inline]
fn digit(value: i32, exp: u64) -> usize {
    ((value.unsigned_abs() as u64 / exp) % RADIX as u64) as usize
}

fn radix_region(ctx: &mut SortContext, data: &mut [i32], lo: usize, hi: usize, label: &str) {
    if hi - lo < 2 {
        return;
    }
    let max_magnitude = data[lo..hi]
        .iter()
        .map(|v| v.unsigned_abs() as u64)
        .max()
        .unwrap_or(0);
    let mut buffer = vec![0i32; hi - lo];
    let mut exp: u64 = 1;
    while max_magnitude / exp > 0 {
        let mut counts = [0usize; RADIX];
        for &value in &data[lo..hi] {
            counts[digit(value, exp)] += 1;
        }
        for d in 1..RADIX {
            counts[d] += counts[d - 1];
        }
        for &value in data[lo..hi].iter().rev() {
            let d = digit(value, exp);
            counts[d] -= 1;
            buffer[counts[d]] = value;
        }
        for (offset, &value) in buffer.iter().enumerate() {
            ctx.write(data, lo + offset, value);
        }
        ctx.record(data, &[lo, hi - 1], format!("Digit pass {exp} over {label} values"));
        exp *= RADIX as u64;
    }
}

// Bucket - ⌈√n⌉ корзин по нормализованному диапазону
pub fn bucket(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let Some((min, max)) = ctx.min_max(data) else {
        return;
    };
    let bucket_count = ((n as f64).sqrt().ceil() as usize).max(1);
    let range = max as i64 - min as i64;
    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); bucket_count];
    for &value in data.iter() {
        // range == 0: все значения равны, одна корзина
        let idx = if range == 0 {
            0
        } else {
            ((value as i64 - min as i64) * (bucket_count as i64 - 1) / range) as usize
        };
        buckets[idx].push(value);
    }
    ctx.record(data, &[], format!("Distributed into {bucket_count} buckets"));

    let mut k = 0;
    for (b, items) in buckets.iter_mut().enumerate() {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && ctx.greater(items[j - 1], items[j]) {
                ctx.swap(items, j - 1, j);
                j -= 1;
            }
        }
        let first = k;
        for &value in items.iter() {
            ctx.write(data, k, value);
            k += 1;
        }
        if k > first {
            ctx.record(data, &[first, k - 1], format!("Bucket {b} placed"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn run(procedure: fn(&mut SortContext, &mut [i32]), input: &[i32]) -> (Vec<i32>, SortContext) {
        let mut ctx = SortContext::new(EngineConfig::default());
        let mut data = input.to_vec();
        procedure(&mut ctx, &mut data);
        (data, ctx)
    }

    #[test]
    fn test_counting_negatives() {
        let (data, ctx) = run(counting, &[-2, 3, -1, 0, 2]);
        assert_eq!(data, vec![-2, -1, 0, 2, 3]);
        assert_eq!(ctx.swaps(), 5);
    }

    #[test]
    fn test_counting_sparse_range() {
        let (data, ctx) = run(counting, &[i32::MAX, i32::MIN, 0]);
        assert_eq!(data, vec![i32::MIN, 0, i32::MAX]);
        assert_eq!(ctx.swaps(), 3);

        let (data, _) = run(counting, &[500_000_000, 0, 7, 500_000_000]);
        assert_eq!(data, vec![0, 7, 500_000_000, 500_000_000]);
    }

    #[test]
    fn test_radix_negatives() {
        let (data, _) = run(radix, &[-10, 5, 0, -3, 8, -1]);
        assert_eq!(data, vec![-10, -3, -1, 0, 5, 8]);
    }

    #[test]
    fn test_radix_extremes() {
        let (data, _) = run(radix, &[i32::MAX, i32::MIN, 0, -1, 1, i32::MIN + 1]);
        assert_eq!(data, vec![i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX]);
    }

    #[test]
    fn test_bucket_all_equal() {
        let (data, _) = run(bucket, &[7, 7, 7, 7]);
        assert_eq!(data, vec![7, 7, 7, 7]);
    }

    #[test]
    fn test_bucket_wide_range() {
        let (data, _) = run(bucket, &[i32::MAX, -5, i32::MIN, 42, 0, 42]);
        assert_eq!(data, vec![i32::MIN, -5, 0, 42, 42, i32::MAX]);
    }
}
