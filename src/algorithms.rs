pub mod bitonic;
pub mod bogo;
pub mod distribution;
pub mod exchange;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;

use super::context::SortContext;

// Процедура сортировки рабочего массива на месте.
// Вызывается только для массивов длиной от двух элементов.
pub type SortProcedure = fn(&mut SortContext, &mut [i32]);

pub use bitonic::bitonic;
pub use bogo::{bogo, BogoMachine, BogoState};
pub use distribution::{bucket, counting, radix};
pub use exchange::{bubble, cocktail, comb, gnome, odd_even};
pub use heap::heap;
pub use insertion::{insertion, selection, shell};
pub use merge::{merge, tim};
pub use quick::quick;
