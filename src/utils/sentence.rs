//! English list composition.

/// Join items into an English list without an Oxford comma.
///
/// # Examples
///
/// - `[]` -> `""`
/// - `["a"]` -> `"a"`
/// - `["a", "b"]` -> `"a and b"`
/// - `["a", "b", "c"]` -> `"a, b and c"`
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", init, last.as_ref())
        }
    }
}
