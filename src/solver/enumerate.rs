use crate::expression::Operator;

/// Every ordering of `items`, lexicographic by input position.
///
/// Equal values are not deduplicated: `[1, 1]` yields two orderings.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn extend<T: Clone>(
        items: &[T],
        used: &mut [bool],
        current: &mut Vec<T>,
        out: &mut Vec<Vec<T>>,
    ) {
        if current.len() == items.len() {
            out.push(current.clone());
            return;
        }
        for (index, item) in items.iter().enumerate() {
            if used.get(index).copied().unwrap_or(true) {
                continue;
            }
            if let Some(flag) = used.get_mut(index) {
                *flag = true;
            }
            current.push(item.clone());
            extend(items, used, current, out);
            current.pop();
            if let Some(flag) = used.get_mut(index) {
                *flag = false;
            }
        }
    }

    let mut out = Vec::new();
    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(items.len());
    extend(items, &mut used, &mut current, &mut out);
    out
}

/// Every sequence of `len` operators, the last position varying fastest
pub fn operator_sequences(len: usize) -> Vec<Vec<Operator>> {
    let mut sequences: Vec<Vec<Operator>> = vec![Vec::with_capacity(len)];
    for _ in 0..len {
        sequences = sequences
            .into_iter()
            .flat_map(|prefix| {
                Operator::ALL.iter().map(move |op| {
                    let mut next = prefix.clone();
                    next.push(*op);
                    next
                })
            })
            .collect();
    }
    sequences
}
