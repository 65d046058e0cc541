use super::{
    errors::EngineError,
    result::EngineResult,
};
use serde::Serialize;
use std::{
    fmt::Display,
    str::FromStr,
};

// AlgorithmKind - закрытый набор поддерживаемых алгоритмов

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
    Counting,
    Radix,
    Bucket,
    Tim,
    Comb,
    Cocktail,
    Gnome,
    OddEven,
    Bogo,
    Bitonic,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 17] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Shell,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Counting,
        Self::Radix,
        Self::Bucket,
        Self::Tim,
        Self::Comb,
        Self::Cocktail,
        Self::Gnome,
        Self::OddEven,
        Self::Bogo,
        Self::Bitonic,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Shell => "Shell Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
            Self::Bucket => "Bucket Sort",
            Self::Tim => "Tim Sort",
            Self::Comb => "Comb Sort",
            Self::Cocktail => "Cocktail Shaker Sort",
            Self::Gnome => "Gnome Sort",
            Self::OddEven => "Odd-Even Sort",
            Self::Bogo => "Bogo Sort",
            Self::Bitonic => "Bitonic Sort",
        }
    }

    // Короткий идентификатор для CLI и сериализации
    pub fn id(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Shell => "shell",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Counting => "counting",
            Self::Radix => "radix",
            Self::Bucket => "bucket",
            Self::Tim => "tim",
            Self::Comb => "comb",
            Self::Cocktail => "cocktail",
            Self::Gnome => "gnome",
            Self::OddEven => "odd_even",
            Self::Bogo => "bogo",
            Self::Bitonic => "bitonic",
        }
    }

    pub fn time_complexity(&self) -> &'static str {
        match self {
            Self::Bubble | Self::Selection | Self::Insertion => "O(n²)",
            Self::Cocktail | Self::Gnome | Self::OddEven => "O(n²)",
            Self::Shell => "O(n^1.5)",
            Self::Merge | Self::Heap | Self::Tim => "O(n log n)",
            Self::Quick => "O(n log n) average, O(n²) worst",
            Self::Counting => "O(n + k)",
            Self::Radix => "O(d·(n + b))",
            Self::Bucket => "O(n + k) average, O(n²) worst",
            Self::Comb => "O(n²/2^p)",
            Self::Bogo => "O((n+1)!)",
            Self::Bitonic => "O(n log² n)",
        }
    }

    pub fn space_complexity(&self) -> &'static str {
        match self {
            Self::Bubble | Self::Selection | Self::Insertion | Self::Shell => "O(1)",
            Self::Heap | Self::Comb | Self::Cocktail | Self::Gnome => "O(1)",
            Self::OddEven | Self::Bogo => "O(1)",
            Self::Merge | Self::Tim | Self::Bitonic => "O(n)",
            Self::Quick => "O(log n)",
            Self::Counting => "O(k)",
            Self::Radix => "O(n + b)",
            Self::Bucket => "O(n + k)",
        }
    }

    // Ищет алгоритм по идентификатору или отображаемому имени
    pub fn from_name(name: &str) -> EngineResult<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let normalized = normalized.strip_suffix("sort").unwrap_or(&normalized);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| {
                let id: String = kind.id().chars().filter(|c| *c != '_').collect();
                id == normalized || (*kind == Self::Cocktail && normalized == "cocktailshaker")
            })
            .ok_or_else(|| EngineError::UnsupportedAlgorithm { name: name.to_string() })
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
