use super::super::context::SortContext;

const COMB_SHRINK_FACTOR: f64 = 1.3;

// Bubble - полные проходы без раннего выхода
pub fn bubble(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    for pass in 0..n - 1 {
        for j in 0..n - 1 - pass {
            ctx.record(data, &[j, j + 1], format!("Compare {} and {}", data[j], data[j + 1]));
            if ctx.greater(data[j], data[j + 1]) {
                ctx.swap(data, j, j + 1);
                ctx.record(data, &[j, j + 1], format!("Swap {} and {}", data[j + 1], data[j]));
            }
        }
        ctx.record(data, &[n - 1 - pass], format!("Position {} settled", n - 1 - pass));
    }
}

// Cocktail - проход вперед, затем назад; окно сужается с обеих сторон
pub fn cocktail(ctx: &mut SortContext, data: &mut [i32]) {
    let mut start = 0;
    let mut end = data.len() - 1;
    while start < end {
        let mut swapped = false;
        for i in start..end {
            if ctx.greater(data[i], data[i + 1]) {
                ctx.swap(data, i, i + 1);
                swapped = true;
                ctx.record(data, &[i, i + 1], format!("Forward swap at {i}"));
            }
        }
        end -= 1;
        for i in (start..end).rev() {
            if ctx.greater(data[i], data[i + 1]) {
                ctx.swap(data, i, i + 1);
                swapped = true;
                ctx.record(data, &[i, i + 1], format!("Backward swap at {i}"));
            }
        }
        start += 1;
        if !swapped {
            break;
        }
    }
}

pub fn gnome(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let mut pos = 0;
    while pos < n {
        if pos == 0 || !ctx.greater(data[pos - 1], data[pos]) {
            pos += 1;
        } else {
            ctx.swap(data, pos - 1, pos);
            ctx.record(data, &[pos - 1, pos], format!("Gnome steps back from {pos}"));
            pos -= 1;
        }
    }
}

// Odd-Even (brick sort)
pub fn odd_even(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let mut sorted = false;
    while !sorted {
        sorted = true;
        for start in [1, 0] {
            let phase = if start == 1 { "Odd" } else { "Even" };
            let mut i = start;
            while i + 1 < n {
                if ctx.greater(data[i], data[i + 1]) {
                    ctx.swap(data, i, i + 1);
                    sorted = false;
                    ctx.record(data, &[i, i + 1], format!("{phase} phase swap at {i}"));
                }
                i += 2;
            }
        }
    }
}

pub fn comb(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let mut gap = n;
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = ((gap as f64 / COMB_SHRINK_FACTOR) as usize).max(1);
        swapped = false;
        ctx.record(data, &[], format!("Gap {gap}"));
        for i in 0..n - gap {
            if ctx.greater(data[i], data[i + gap]) {
                ctx.swap(data, i, i + gap);
                swapped = true;
                ctx.record(data, &[i, i + gap], format!("Swap across gap {gap}"));
            }
        }
    }
}
