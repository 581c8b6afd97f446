// File: crates/heap-plots/src/dataset.rs
// Summary: Hardcoded min-heap benchmark measurements and their columnar view.

/// One benchmark row: every measurement taken at a single heap size.
/// Comparison counts are a machine-independent complexity proxy; times
/// are wall-clock milliseconds. Merge reports time only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRecord {
    pub sample_size: u32,
    pub insert_comparisons: u64,
    pub insert_time_ms: f64,
    pub extract_comparisons: u64,
    pub extract_time_ms: f64,
    pub decrease_comparisons: u64,
    pub decrease_time_ms: f64,
    pub merge_time_ms: f64,
}

/// Measured results for the external min-heap, one record per heap size.
pub const BENCHMARKS: [BenchmarkRecord; 4] = [
    BenchmarkRecord {
        sample_size: 100,
        insert_comparisons: 197,
        insert_time_ms: 0.445958,
        extract_comparisons: 1_028,
        extract_time_ms: 0.363541,
        decrease_comparisons: 91,
        decrease_time_ms: 0.064125,
        merge_time_ms: 0.109125,
    },
    BenchmarkRecord {
        sample_size: 1_000,
        insert_comparisons: 2_205,
        insert_time_ms: 0.544042,
        extract_comparisons: 16_682,
        extract_time_ms: 1.370166,
        decrease_comparisons: 816,
        decrease_time_ms: 0.207209,
        merge_time_ms: 0.348833,
    },
    BenchmarkRecord {
        sample_size: 10_000,
        insert_comparisons: 22_655,
        insert_time_ms: 2.069042,
        extract_comparisons: 233_526,
        extract_time_ms: 8.88375,
        decrease_comparisons: 4_496,
        decrease_time_ms: 1.098042,
        merge_time_ms: 1.983625,
    },
    BenchmarkRecord {
        sample_size: 100_000,
        insert_comparisons: 227_243,
        insert_time_ms: 8.722875,
        extract_comparisons: 2_999_412,
        extract_time_ms: 73.194625,
        decrease_comparisons: 8_913,
        decrease_time_ms: 5.920208,
        merge_time_ms: 21.630875,
    },
];

/// Columnar view of the record table, in the shape the renderer consumes.
/// Derived from `BenchmarkRecord`s; kept as plain vectors so shape
/// validation happens where columns are paired with the sample axis.
#[derive(Clone, Debug, Default)]
pub struct Columns {
    pub sizes: Vec<f64>,
    pub insert_comparisons: Vec<f64>,
    pub insert_time_ms: Vec<f64>,
    pub extract_comparisons: Vec<f64>,
    pub extract_time_ms: Vec<f64>,
    pub decrease_comparisons: Vec<f64>,
    pub decrease_time_ms: Vec<f64>,
    pub merge_time_ms: Vec<f64>,
}

impl Columns {
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        Self {
            sizes: records.iter().map(|r| r.sample_size as f64).collect(),
            insert_comparisons: records.iter().map(|r| r.insert_comparisons as f64).collect(),
            insert_time_ms: records.iter().map(|r| r.insert_time_ms).collect(),
            extract_comparisons: records.iter().map(|r| r.extract_comparisons as f64).collect(),
            extract_time_ms: records.iter().map(|r| r.extract_time_ms).collect(),
            decrease_comparisons: records.iter().map(|r| r.decrease_comparisons as f64).collect(),
            decrease_time_ms: records.iter().map(|r| r.decrease_time_ms).collect(),
            merge_time_ms: records.iter().map(|r| r.merge_time_ms).collect(),
        }
    }
}
