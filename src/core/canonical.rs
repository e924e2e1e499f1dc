//! Value canonicalisation used for equality-by-key and truthiness.
//!
//! `canonical_key` is the comma-joined stringification that `uniq`,
//! `intersection` and joined-key memoization compare on. It collides on
//! purpose in the same places a joined string does: `vec![1, 2]` and
//! `"1,2"` produce the same key. `structural_key` is a tagged encoding
//! with no such collisions.

use serde_json::Value;

/// Placeholder written for absent values
pub const UNDEFINED: &str = "undefined";

/// A value that can be reduced to a string key.
pub trait CanonicalKey {
    /// Joined stringification. Different values may share a key.
    fn canonical_key(&self) -> String;

    /// Type-tagged encoding. Distinct values never share a key.
    fn structural_key(&self) -> String;
}

/// A value with a truthiness, used when no predicate is supplied.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// Format a float the way a joined string shows numbers: integral values
/// lose their fractional part.
pub fn format_number(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if number == 0.0 {
        "0".to_string()
    } else if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{:.0}", number)
    } else {
        format!("{}", number)
    }
}

fn tagged_str(tag: char, text: &str) -> String {
    format!("{}{}:{}", tag, text.len(), text)
}

macro_rules! integer_keys {
    ($($ty:ty),*) => {
        $(
            impl CanonicalKey for $ty {
                fn canonical_key(&self) -> String {
                    self.to_string()
                }

                fn structural_key(&self) -> String {
                    format!("i:{}", self)
                }
            }

            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

integer_keys!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_keys {
    ($($ty:ty),*) => {
        $(
            impl CanonicalKey for $ty {
                fn canonical_key(&self) -> String {
                    format_number(f64::from(*self))
                }

                fn structural_key(&self) -> String {
                    format!("f:{}", format_number(f64::from(*self)))
                }
            }

            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

float_keys!(f32, f64);

impl CanonicalKey for bool {
    fn canonical_key(&self) -> String {
        self.to_string()
    }

    fn structural_key(&self) -> String {
        format!("b:{}", self)
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl CanonicalKey for char {
    fn canonical_key(&self) -> String {
        self.to_string()
    }

    fn structural_key(&self) -> String {
        tagged_str('s', self.encode_utf8(&mut [0; 4]))
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl CanonicalKey for str {
    fn canonical_key(&self) -> String {
        self.to_string()
    }

    fn structural_key(&self) -> String {
        tagged_str('s', self)
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl CanonicalKey for String {
    fn canonical_key(&self) -> String {
        self.clone()
    }

    fn structural_key(&self) -> String {
        tagged_str('s', self)
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: CanonicalKey + ?Sized> CanonicalKey for &T {
    fn canonical_key(&self) -> String {
        (**self).canonical_key()
    }

    fn structural_key(&self) -> String {
        (**self).structural_key()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: CanonicalKey> CanonicalKey for Option<T> {
    fn canonical_key(&self) -> String {
        match self {
            Some(value) => value.canonical_key(),
            None => UNDEFINED.to_string(),
        }
    }

    fn structural_key(&self) -> String {
        match self {
            Some(value) => format!("some({})", value.structural_key()),
            None => "none".to_string(),
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: CanonicalKey> CanonicalKey for [T] {
    fn canonical_key(&self) -> String {
        self.iter()
            .map(CanonicalKey::canonical_key)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn structural_key(&self) -> String {
        let parts: Vec<String> = self.iter().map(CanonicalKey::structural_key).collect();
        format!("[{}]", parts.join(","))
    }
}

impl<T: CanonicalKey> CanonicalKey for Vec<T> {
    fn canonical_key(&self) -> String {
        self.as_slice().canonical_key()
    }

    fn structural_key(&self) -> String {
        self.as_slice().structural_key()
    }
}

impl CanonicalKey for Value {
    fn canonical_key(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(u)) => u.to_string(),
                _ => format_number(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => s.clone(),
            Value::Array(items) => items.canonical_key(),
            Value::Object(_) => "[object Object]".to_string(),
        }
    }

    fn structural_key(&self) -> String {
        // serde_json output is already unambiguous
        format!("j:{}", self)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl CanonicalKey for () {
    fn canonical_key(&self) -> String {
        String::new()
    }

    fn structural_key(&self) -> String {
        "()".to_string()
    }
}

macro_rules! tuple_keys {
    ($($name:ident $index:tt),+) => {
        impl<$($name: CanonicalKey),+> CanonicalKey for ($($name,)+) {
            fn canonical_key(&self) -> String {
                [$(self.$index.canonical_key()),+].join(",")
            }

            fn structural_key(&self) -> String {
                format!("({})", [$(self.$index.structural_key()),+].join(","))
            }
        }
    };
}

tuple_keys!(A 0);
tuple_keys!(A 0, B 1);
tuple_keys!(A 0, B 1, C 2);
tuple_keys!(A 0, B 1, C 2, D 3);
tuple_keys!(A 0, B 1, C 2, D 3, E 4);
tuple_keys!(A 0, B 1, C 2, D 3, E 4, F 5);
