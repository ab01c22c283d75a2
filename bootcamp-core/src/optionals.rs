//! Working with values that may be absent.
//!
//! Every function here either branches on the `Option` explicitly or takes
//! the fallback from the caller.

pub const GUEST: &str = "Guest";

/// Greeting for an optional name and age.
pub fn greeting(name: Option<&str>, age: Option<u32>) -> String {
    let Some(name) = name else {
        return "Can't greet without a name".to_string();
    };
    match age {
        Some(age) => format!("Hello {name}, you are {age} years old"),
        None => format!("Hello {name}! Age unknown"),
    }
}

/// First present value of `name` then `email`, else [`GUEST`].
pub fn display_name<'a>(name: Option<&'a str>, email: Option<&'a str>) -> &'a str {
    name.or(email).unwrap_or(GUEST)
}

/// Drop the missing entries, keeping order.
pub fn compact(values: &[Option<i64>]) -> Vec<i64> {
    values.iter().flatten().copied().collect()
}

/// First element of an optional list, or `default` when the list is absent
/// or empty.
pub fn first_or(values: Option<&[i64]>, default: i64) -> i64 {
    values
        .and_then(|values| values.first())
        .copied()
        .unwrap_or(default)
}

/// Length of an optional list, treating absence as empty.
pub fn count_or_zero<T>(values: Option<&[T]>) -> usize {
    values.map_or(0, <[T]>::len)
}
