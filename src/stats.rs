//! Source statistics for a frequency/code table pair.

use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;

/// How well a code table fits its symbol distribution.
///
/// `entropy` is the theoretical minimum average bits per symbol for the
/// distribution, `avg_code_len` the expected codeword length under the given
/// table, and `efficiency` their ratio. An efficiency of 1.0 means the code
/// is as tight as any prefix code can be for this source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodingStats {
    pub entropy: f64,
    pub avg_code_len: f64,
    pub efficiency: f64,
}

/// Compute entropy, expected code length and efficiency.
///
/// Pure function of its inputs. Probabilities come from `freq`; the average
/// length sums only over symbols present in both tables (they always match
/// when the table was derived from the same frequencies). An empty table
/// yields all zeroes rather than NaN.
pub fn stats<T: Ord + Clone>(freq: &FrequencyTable<T>, codes: &CodeTable<T>) -> CodingStats {
    if freq.is_empty() {
        return CodingStats {
            entropy: 0.0,
            avg_code_len: 0.0,
            efficiency: 0.0,
        };
    }

    let total = freq.total() as f64;
    let mut entropy = 0.0;
    let mut avg_code_len = 0.0;
    for (symbol, count) in freq.iter() {
        let p = count as f64 / total;
        entropy -= p * p.log2();
        if let Some(word) = codes.get(symbol) {
            avg_code_len += p * word.len() as f64;
        }
    }

    let efficiency = if avg_code_len == 0.0 {
        0.0
    } else {
        entropy / avg_code_len
    };
    CodingStats {
        entropy,
        avg_code_len,
        efficiency,
    }
}
