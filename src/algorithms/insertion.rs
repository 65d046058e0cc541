use super::super::context::SortContext;

pub fn insertion(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    insertion_range(ctx, data, 0, n);
}

// Сортировка вставками на полуинтервале [lo, hi) через соседние swap
pub(crate) fn insertion_range(ctx: &mut SortContext, data: &mut [i32], lo: usize, hi: usize) {
    for i in lo + 1..hi {
        ctx.record(data, &[i], format!("Insert {}", data[i]));
        let mut j = i;
        while j > lo && ctx.greater(data[j - 1], data[j]) {
            ctx.swap(data, j - 1, j);
            ctx.record(data, &[j - 1, j], format!("Shift {} left", data[j - 1]));
            j -= 1;
        }
    }
}

pub fn selection(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    for i in 0..n - 1 {
        let mut min = i;
        for j in i + 1..n {
            if ctx.less(data[j], data[min]) {
                min = j;
                ctx.record(data, &[i, min], format!("New minimum {}", data[min]));
            }
        }
        if min != i {
            ctx.swap(data, i, min);
            ctx.record(data, &[i, min], format!("Place {} at {i}", data[i]));
        }
    }
}

// Shell - промежуток n/2, делится пополам до 0
pub fn shell(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        ctx.record(data, &[], format!("Gap {gap}"));
        for i in gap..n {
            let mut j = i;
            while j >= gap && ctx.greater(data[j - gap], data[j]) {
                ctx.swap(data, j - gap, j);
                ctx.record(data, &[j - gap, j], format!("Swap across gap {gap}"));
                j -= gap;
            }
        }
        gap /= 2;
    }
}
