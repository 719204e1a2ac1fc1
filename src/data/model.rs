// ---------------------------------------------------------------------------
// Record – one parsed line of a results file
// ---------------------------------------------------------------------------

/// Method labels for the four numeric columns of a results file, in column
/// order. The experiment reports MC1, MC2, MC4 and MC5; there is no MC3
/// column in the data.
pub const METHOD_LABELS: [&str; 4] = ["MC1", "MC2", "MC4", "MC5"];

/// Number of numeric columns in every record.
pub const METHOD_COUNT: usize = METHOD_LABELS.len();

/// One parsed input line: a sample-size token plus one squared-error value
/// per method.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Leading token, kept opaque; becomes an x-axis tick label.
    pub label: String,
    /// Column values in file order (MC1, MC2, MC4, MC5).
    pub values: [f64; METHOD_COUNT],
}

// ---------------------------------------------------------------------------
// ConvergenceData – the complete parsed dataset
// ---------------------------------------------------------------------------

/// One method's squared-error sequence across all sample sizes.
#[derive(Debug, Clone)]
pub struct MethodSeries {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// The full parsed dataset: the shared x-axis labels plus one series per
/// method, all of identical length.
#[derive(Debug, Clone)]
pub struct ConvergenceData {
    /// Sample-size tokens in file order (shared x-axis).
    pub labels: Vec<String>,
    /// One series per entry of [`METHOD_LABELS`], in the same order.
    pub series: [MethodSeries; METHOD_COUNT],
}

impl ConvergenceData {
    /// Transpose parsed records into per-method series.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut labels = Vec::with_capacity(records.len());
        let mut series = METHOD_LABELS.map(|name| MethodSeries {
            name,
            values: Vec::with_capacity(records.len()),
        });

        for rec in records {
            labels.push(rec.label);
            for (col, value) in rec.values.into_iter().enumerate() {
                series[col].values.push(value);
            }
        }

        ConvergenceData { labels, series }
    }

    /// Number of records (equals the length of every series).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
