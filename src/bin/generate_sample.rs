//! Writes a synthetic `pagerank_best.txt` for trying out the viewer without
//! running the full ranking experiment.

/// Minimal deterministic PRNG (splitmix64)
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Render a full results file: one line per sample size, the squared error
/// of each method decaying roughly as 1/N with a little jitter.
fn render_results(seed: u64) -> String {
    let mut rng = SampleRng::new(seed);

    let doc_count: u64 = 1000;
    let sample_sizes = [1, 5, 10, 20, 30].map(|k| k * doc_count);

    // Per-method error coefficients; MC4 and MC5 converge fastest.
    let method_coeffs = [2.4e-4, 1.5e-4, 6.0e-5, 4.5e-5];

    let mut out = String::new();
    for &n in &sample_sizes {
        let mut line = n.to_string();
        for &coeff in &method_coeffs {
            let jitter = 1.0 + 0.2 * (rng.next_f64() - 0.5);
            let sse = coeff * doc_count as f64 / n as f64 * jitter;
            line.push_str(&format!(" {sse:.10}"));
        }
        line.push('\n');
        out.push_str(&line);
    }
    out
}

fn main() {
    let output_path = "pagerank_best.txt";
    let out = render_results(42);
    let n_lines = out.lines().count();

    std::fs::write(output_path, &out).expect("Failed to write results file");

    println!("Wrote {n_lines} sample sizes to {output_path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_a_fixed_seed() {
        assert_eq!(render_results(42), render_results(42));
    }

    #[test]
    fn lines_follow_the_results_format() {
        let out = render_results(42);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);

        for line in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), 5);
            tokens[0].parse::<u64>().unwrap();
            for tok in &tokens[1..] {
                assert!(tok.parse::<f64>().unwrap() > 0.0);
            }
        }
    }
}
