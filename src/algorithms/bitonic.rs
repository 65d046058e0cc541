use super::super::context::SortContext;

// Bitonic - работает только на длине степени двойки.
// Дополняем максимумом, сортируем, отрезаем дополнение.
pub fn bitonic(ctx: &mut SortContext, data: &mut [i32]) {
    let n = data.len();
    let Some((_, max)) = ctx.min_max(data) else {
        return;
    };
    let padded_len = n.next_power_of_two();
    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(data);
    padded.resize(padded_len, max);
    if padded_len > n {
        ctx.record(data, &[], format!("Padded to {padded_len} with sentinel {max}"));
    }

    let mut padding = vec![false; padded_len];
    padding[n..].fill(true);
    let mut network = Network { ctx: &mut *ctx, padding };
    network.sort(&mut padded, 0, padded_len, true);

    for (k, &value) in padded[..n].iter().enumerate() {
        ctx.write(data, k, value);
    }
    ctx.record(data, &[], "Padding removed");
}

// Копии-заполнители равны максимуму и по значению неотличимы от настоящего,
// поэтому их позиции отслеживаются отдельно и переезжают вместе с обменами.
// Снимок - настоящие значения в порядке буфера, всегда перестановка входа.
struct Network<'a> {
    ctx: &'a mut SortContext,
    padding: Vec<bool>,
}

impl Network<'_> {
    fn sort(&mut self, buf: &mut [i32], lo: usize, count: usize, ascending: bool) {
        if count < 2 {
            return;
        }
        let half = count / 2;
        self.sort(buf, lo, half, true);
        self.sort(buf, lo + half, half, false);
        self.merge(buf, lo, count, ascending);
    }

    fn merge(&mut self, buf: &mut [i32], lo: usize, count: usize, ascending: bool) {
        if count < 2 {
            return;
        }
        let half = count / 2;
        for i in lo..lo + half {
            self.compare_and_swap(buf, i, i + half, ascending);
        }
        self.merge(buf, lo, half, ascending);
        self.merge(buf, lo + half, half, ascending);
    }

    fn compare_and_swap(&mut self, buf: &mut [i32], i: usize, j: usize, ascending: bool) {
        let out_of_order = if ascending {
            self.ctx.greater(buf[i], buf[j])
        } else {
            self.ctx.less(buf[i], buf[j])
        };
        if out_of_order {
            self.ctx.swap(buf, i, j);
            self.padding.swap(i, j);
            let direction = if ascending { "ascending" } else { "descending" };
            let padding = &self.padding;
            self.ctx.record_with(format!("Swap {i} and {j} {direction}"), || {
                visible_frame(buf, padding, i, j)
            });
        }
    }
}

// Индексы подсветки пересчитываются в позиции кадра, заполнители выпадают
fn visible_frame(buf: &[i32], padding: &[bool], i: usize, j: usize) -> (Vec<i32>, Vec<usize>) {
    let mut frame = Vec::with_capacity(buf.len());
    let mut highlighted = Vec::with_capacity(2);
    for (idx, (&value, &pad)) in buf.iter().zip(padding).enumerate() {
        if pad {
            continue;
        }
        if idx == i || idx == j {
            highlighted.push(frame.len());
        }
        frame.push(value);
    }
    (frame, highlighted)
}
