use super::super::context::SortContext;

// Quick - схема Ломуто, опорный элемент последний
pub fn quick(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    quick_range(ctx, data, 0, n - 1);
}

// Рекурсия только в меньшую часть, большая обрабатывается циклом:
// глубина стека O(log n) даже на отсортированном входе.
fn quick_range(ctx: &mut SortContext, data: &mut [i32], mut low: usize, mut high: usize) {
    while low < high {
        let pivot = partition(ctx, data, low, high);
        if pivot - low < high - pivot {
            if pivot > low {
                quick_range(ctx, data, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            quick_range(ctx, data, pivot + 1, high);
            // здесь pivot > low, иначе левая часть была бы меньшей
            high = pivot - 1;
        }
    }
}

fn partition(ctx: &mut SortContext, data: &mut [i32], low: usize, high: usize) -> usize {
    let pivot = data[high];
    ctx.record(data, &[high], format!("Pivot selected: {pivot}"));
    let mut store = low;
    for j in low..high {
        if ctx.less(data[j], pivot) {
            if store != j {
                ctx.swap(data, store, j);
                ctx.record(data, &[store, j], format!("Move {} below pivot {pivot}", data[store]));
            }
            store += 1;
        }
    }
    if store != high {
        ctx.swap(data, store, high);
    }
    ctx.record(data, &[store], format!("Pivot {pivot} placed at {store}"));
    store
}
