/// Sort data by value and return index-value pairs, ties kept in input order.
fn sort_indexed(data: &[f64]) -> Vec<(usize, f64)> {
    let mut indexed: Vec<(usize, f64)> = data.iter().cloned().enumerate().collect();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
    indexed
}

/// Ascending sort of a slice that remembers where every value came from.
///
/// Results computed in sorted order can be put back into the caller's order
/// with [`SortPermutation::scatter`].
#[derive(Debug, Clone, PartialEq)]
pub struct SortPermutation {
    /// Values in ascending order
    sorted: Vec<f64>,
    /// `order[sorted_position] = original_index`
    order: Vec<usize>,
}

impl SortPermutation {
    /// Sort `values` ascending, breaking ties on the original index.
    pub fn new(values: &[f64]) -> Self {
        let (order, sorted): (Vec<usize>, Vec<f64>) = sort_indexed(values).into_iter().unzip();
        Self { sorted, order }
    }

    /// The values in ascending order.
    pub fn sorted_values(&self) -> &[f64] {
        &self.sorted
    }

    /// Original index of the value at each sorted position.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Move results computed in sorted order back to the original positions.
    pub fn scatter(&self, sorted_results: &[f64]) -> Vec<f64> {
        debug_assert_eq!(sorted_results.len(), self.order.len());

        let mut restored = vec![0.0; self.order.len()];
        for (&original, &value) in self.order.iter().zip(sorted_results) {
            restored[original] = value;
        }
        restored
    }
}
