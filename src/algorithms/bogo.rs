use super::{
    super::{
        config::BogoConfig,
        context::SortContext,
    },
    insertion::insertion_range,
};
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};
use tracing::{debug, trace};

// BogoState
//
// Shuffling -> Sorted -> Done
// Shuffling -> AttemptsExhausted -> FallbackSort -> Done
// Вход длиннее size_limit начинает сразу с FallbackSort.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BogoState {
    Shuffling,
    Sorted,
    AttemptsExhausted,
    FallbackSort,
    Done,
}

pub struct BogoMachine {
    state: BogoState,
    attempts: usize,
    config: BogoConfig,
    rng: StdRng,
}

impl BogoMachine {
    pub fn new(config: BogoConfig, len: usize) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = if len > config.size_limit {
            BogoState::FallbackSort
        } else {
            BogoState::Shuffling
        };
        Self { state, attempts: 0, config, rng }
    }

    #[inline]
    pub fn state(&self) -> BogoState {
        self.state
    }

    // Количество выполненных перемешиваний
    #[inline]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn step(&mut self, ctx: &mut SortContext, data: &mut [i32]) -> BogoState {
        let next = match self.state {
            BogoState::Shuffling => {
                if is_sorted(ctx, data) {
                    BogoState::Sorted
                } else if self.attempts >= self.config.max_attempts {
                    BogoState::AttemptsExhausted
                } else {
                    self.shuffle(ctx, data);
                    BogoState::Shuffling
                }
            }
            BogoState::Sorted => BogoState::Done,
            BogoState::AttemptsExhausted => {
                debug!(attempts = self.attempts, "bogo attempts exhausted, falling back");
                ctx.record(data, &[], format!("Gave up after {} shuffles", self.attempts));
                BogoState::FallbackSort
            }
            BogoState::FallbackSort => {
                ctx.record(data, &[], "Fallback to insertion sort");
                let len = data.len();
                insertion_range(ctx, data, 0, len);
                BogoState::Done
            }
            BogoState::Done => BogoState::Done,
        };
        if next != self.state {
            trace!(from = ?self.state, to = ?next, attempts = self.attempts, "bogo transition");
        }
        self.state = next;
        next
    }

    pub fn run(&mut self, ctx: &mut SortContext, data: &mut [i32]) {
        while self.step(ctx, data) != BogoState::Done {}
    }

    // Fisher-Yates
    fn shuffle(&mut self, ctx: &mut SortContext, data: &mut [i32]) {
        for i in (1..data.len()).rev() {
            let j = self.rng.random_range(0..=i);
            if i != j {
                ctx.swap(data, i, j);
            }
        }
        self.attempts += 1;
        ctx.record(data, &[], format!("Shuffle attempt {}", self.attempts));
    }
}

fn is_sorted(ctx: &mut SortContext, data: &[i32]) -> bool {
    (1..data.len()).all(|i| !ctx.greater(data[i - 1], data[i]))
}

pub fn bogo(ctx: &mut SortContext, data: &mut [i32]) {
    let config = ctx.config().bogo;
    let mut machine = BogoMachine::new(config, data.len());
    machine.run(ctx, data);
}
