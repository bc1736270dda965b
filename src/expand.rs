//! Lazy depth-first expansion of a value through a successor function.
//!
//! Given a start value and a function producing zero or more successors,
//! [`expand`] yields the start followed by every reachable value, each
//! successor immediately followed by its own full expansion. The sequence is
//! pull-based: a successor list is only requested when its owner is
//! consumed, so infinite chains work as long as the consumer stops asking.
//!
//! Typical uses are following a chain of named mappings until a terminal
//! domain is reached, and counting recursively-awarded follow-on items in a
//! scoring cascade.
//!
//! # Example
//!
//! ```
//! use aoc_grid::expand;
//!
//! let reachable: Vec<u32> = expand(1, |n| if *n < 4 { Some(n + 1) } else { None }).collect();
//! assert_eq!(reachable, vec![1, 2, 3, 4]);
//! ```

/// Creates an iterator yielding `start` followed by the depth-first
/// expansion of every value produced by `successors`.
///
/// `successors` may return any `IntoIterator` — a `Vec`, an `Option`, a lazy
/// iterator. Values are visited pre-order: each yielded value's own
/// expansion is exhausted before its later siblings are touched. The helper
/// does no cycle detection; if `successors` can revisit a value, the caller
/// is responsible for termination.
///
/// # Example
///
/// ```
/// use aoc_grid::expand;
///
/// // 0 -> [1, 4], 1 -> [2, 3]: depth-first, 1's subtree comes before 4.
/// let order: Vec<u32> = expand(0, |n| match n {
///     0 => vec![1, 4],
///     1 => vec![2, 3],
///     _ => vec![],
/// })
/// .collect();
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// ```
pub fn expand<T, I, F>(start: T, successors: F) -> Expand<T, I, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
{
    Expand {
        successors,
        stack: Vec::new(),
        start: Some(start),
    }
}

/// Iterator returned by [`expand`].
///
/// Holds one successor iterator per level of the expansion currently being
/// walked, so memory use is bounded by the depth of the traversal, not the
/// number of reachable values.
pub struct Expand<T, I, F>
where
    I: IntoIterator<Item = T>,
{
    successors: F,
    stack: Vec<I::IntoIter>,
    start: Option<T>,
}

impl<T, I, F> Iterator for Expand<T, I, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> I,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match self.start.take() {
            Some(start) => start,
            None => loop {
                let top = self.stack.last_mut()?;
                match top.next() {
                    Some(value) => break value,
                    None => {
                        self.stack.pop();
                    }
                }
            },
        };
        self.stack.push((self.successors)(&value).into_iter());
        Some(value)
    }
}
