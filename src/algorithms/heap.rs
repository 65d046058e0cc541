use super::super::context::SortContext;

pub fn heap(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(ctx, data, n, root);
    }
    ctx.record(data, &[0], "Max-heap built");
    for end in (1..n).rev() {
        ctx.swap(data, 0, end);
        ctx.record(data, &[0, end], format!("Move max {} to {end}", data[end]));
        sift_down(ctx, data, end, 0);
    }
}

// Просеивание вниз в куче размера len
fn sift_down(ctx: &mut SortContext, data: &mut [i32], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && ctx.greater(data[left], data[largest]) {
            largest = left;
        }
        if right < len && ctx.greater(data[right], data[largest]) {
            largest = right;
        }
        if largest == root {
            return;
        }
        ctx.swap(data, root, largest);
        ctx.record(data, &[root, largest], format!("Sift {} down", data[largest]));
        root = largest;
    }
}
